use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::centered_fixed;

const PICKER_WIDTH: u16 = 34;

/// Render the staff picker popup for the prompted row
pub fn render_staff_picker(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let row_name = app
        .state
        .staff_prompt()
        .and_then(|id| app.state.roster().get(id))
        .filter(|row| !row.is_placeholder())
        .map(|row| row.name.clone());
    let title = match row_name {
        Some(name) => format!(" 替换 {} ", name),
        None => " 选择人员 ".to_string(),
    };

    let height = app.candidates.len().max(1) as u16 + 2;
    let popup = centered_fixed(PICKER_WIDTH, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    app.picker_hits.clear();
    if app.candidates.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " (no candidates)",
                Style::default().fg(app.theme.dim).bg(bg),
            )),
            inner,
        );
        return;
    }

    let name_width = 12;
    let mut lines: Vec<Line> = Vec::with_capacity(app.candidates.len());
    for (i, candidate) in app.candidates.iter().enumerate() {
        if i >= inner.height as usize {
            break;
        }
        let selected = i == app.picker_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let marker = if selected { "\u{25B8} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                unicode::pad_to_width(&candidate.name, name_width),
                Style::default().fg(app.theme.text_bright).bg(row_bg),
            ),
            Span::styled(
                unicode::pad_to_width(&candidate.tag, inner.width.saturating_sub(14) as usize),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
        ]));
        app.picker_hits
            .push((Rect::new(inner.x, inner.y + i as u16, inner.width, 1), i));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}
