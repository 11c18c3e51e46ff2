use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::cell::{CellKey, slot_label};
use crate::model::staff::StaffRow;
use crate::ops::stats::ScheduleStats;
use crate::tui::app::App;
use crate::tui::layout::{CELL_WIDTH, GridLayout, NAME_COL_WIDTH};
use crate::util::unicode;

const PLACEHOLDER_LABEL: &str = "添加人员";
const UNCONFIRMED_LABEL: &str = "待确认";
const ADD_ROW_LABEL: &str = "+ 添加员工";

/// Cell content width (the last column of each cell is the separator)
const CELL_TEXT_WIDTH: usize = CELL_WIDTH as usize - 1;
/// Name content width after the leading marker column
const NAME_TEXT_WIDTH: usize = NAME_COL_WIDTH as usize - 2;

/// Render the scheduling grid and record its geometry for hit testing
pub fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = GridLayout::new(
        area,
        app.scroll_slot,
        app.scroll_row,
        app.state.roster().len(),
    );
    app.layout = layout;
    let app = &*app;

    let stats = app.state.stats();
    let pulse = app.state.pulse_cell(Instant::now()).cloned();

    let mut lines: Vec<Line> = Vec::with_capacity(layout.rendered_rows * 2 + 3);
    lines.push(revenue_line(app, &layout));
    lines.push(slot_line(app, &layout));
    let rows = app.state.roster().rows();
    for (index, row) in rows
        .iter()
        .enumerate()
        .skip(layout.first_row)
        .take(layout.rendered_rows)
    {
        let [first, second] = row_lines(app, &layout, index, row, &stats, pulse.as_ref());
        lines.push(first);
        lines.push(second);
    }
    lines.push(Line::from(Span::styled(
        format!(" {}", ADD_ROW_LABEL),
        Style::default().fg(app.theme.highlight).bg(app.theme.background),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn separator(app: &App) -> Span<'static> {
    Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )
}

fn name_cell(text: &str, style: Style, app: &App) -> Vec<Span<'static>> {
    vec![
        Span::styled(" ", Style::default().bg(app.theme.background)),
        Span::styled(unicode::pad_to_width(text, NAME_TEXT_WIDTH), style),
        separator(app),
    ]
}

fn revenue_line<'a>(app: &App, layout: &GridLayout) -> Line<'a> {
    let dim = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let mut spans = name_cell("营业额", dim, app);
    let revenue = format!("¥{}", app.revenue_per_slot);
    for _ in 0..layout.visible_slots {
        spans.push(Span::styled(
            unicode::center_in_width(&revenue, CELL_TEXT_WIDTH),
            dim,
        ));
        spans.push(separator(app));
    }
    Line::from(spans)
}

fn slot_line<'a>(app: &App, layout: &GridLayout) -> Line<'a> {
    let bg = app.theme.background;
    let text = Style::default().fg(app.theme.text).bg(bg);
    let mut spans = name_cell("员工", text, app);
    for slot in layout.first_slot..layout.first_slot + layout.visible_slots {
        let style = if slot == app.cursor_slot {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            text
        };
        spans.push(Span::styled(
            unicode::center_in_width(&slot_label(slot), CELL_TEXT_WIDTH),
            style,
        ));
        spans.push(separator(app));
    }
    Line::from(spans)
}

/// The two screen lines of one staff row
fn row_lines<'a>(
    app: &App,
    layout: &GridLayout,
    index: usize,
    row: &StaffRow,
    stats: &ScheduleStats,
    pulse: Option<&CellKey>,
) -> [Line<'a>; 2] {
    let bg = app.theme.background;
    let is_cursor_row = index == app.cursor_row;

    // Name column: marker + name, then tag or the unconfirmed badge
    let marker = if is_cursor_row { "\u{25B8}" } else { " " };
    let (name, name_style) = if row.is_placeholder() {
        (
            PLACEHOLDER_LABEL,
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        (
            row.name.as_str(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )
    };
    let mut first = vec![
        Span::styled(marker, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(unicode::pad_to_width(name, NAME_TEXT_WIDTH), name_style),
        separator(app),
    ];
    let mut second = if stats.has_unconfirmed(&row.id) {
        name_cell(
            UNCONFIRMED_LABEL,
            Style::default().fg(app.theme.yellow).bg(bg),
            app,
        )
    } else {
        name_cell(&row.tag, Style::default().fg(app.theme.dim).bg(bg), app)
    };

    for slot in layout.first_slot..layout.first_slot + layout.visible_slots {
        let key = CellKey::new(row.id.as_str(), slot);
        let entry = app.state.schedule().get(&key);
        let selected = app.state.is_selected(&key);

        let cell_bg = if pulse == Some(&key) {
            app.theme.highlight
        } else if is_cursor_row && slot == app.cursor_slot {
            app.theme.cursor_bg
        } else if selected {
            app.theme.selection_bg
        } else {
            bg
        };

        let (top, top_style, bottom, bottom_style) = match entry {
            Some(entry) => {
                let item = app.state.catalog().get(&entry.work_id);
                let label = item.map_or(entry.work_id.as_str(), |i| i.label.as_str());
                let fg = item.map_or(app.theme.dim, |i| app.theme.work_color(&i.color_token));
                let mark = if entry.confirmed { "" } else { "\u{2022}" };
                (
                    label,
                    Style::default().fg(fg).bg(cell_bg).add_modifier(Modifier::BOLD),
                    mark,
                    Style::default().fg(app.theme.yellow).bg(cell_bg),
                )
            }
            None if selected => (
                "\u{00B7}",
                Style::default().fg(app.theme.highlight).bg(cell_bg),
                "",
                Style::default().bg(cell_bg),
            ),
            None => ("", Style::default().bg(cell_bg), "", Style::default().bg(cell_bg)),
        };

        first.push(Span::styled(
            unicode::center_in_width(top, CELL_TEXT_WIDTH),
            top_style,
        ));
        first.push(separator(app));
        second.push(Span::styled(
            unicode::center_in_width(bottom, CELL_TEXT_WIDTH),
            bottom_style,
        ));
        second.push(separator(app));
    }

    [Line::from(first), Line::from(second)]
}
