use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;

const CONFIRM_LABEL: &str = " 确认 ";

/// Render efficiency, staff count and hours, plus the confirm button when
/// anything is still unconfirmed
pub fn render_summary_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.state.stats();
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" 人效 ", label),
        Span::styled(stats.efficiency_label(), value),
        Span::styled("  已排 ", label),
        Span::styled(stats.scheduled_staff.len().to_string(), value),
        Span::styled("人", label),
        Span::styled("  工时 ", label),
        Span::styled(stats.total_hours.to_string(), value),
        Span::styled("h", label),
    ];

    app.confirm_button = None;
    let pending = stats.unconfirmed_staff.len();
    if pending > 0 {
        let notice = format!("{} 个待确认 ", pending);
        let right = vec![
            Span::styled(notice, Style::default().fg(app.theme.yellow).bg(bg)),
            Span::styled(
                CONFIRM_LABEL,
                Style::default()
                    .fg(bg)
                    .bg(app.theme.green)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        let left_width = spans_width(&spans);
        let right_width = spans_width(&right);
        let width = area.width as usize;
        if left_width + right_width < width {
            spans.push(Span::styled(
                " ".repeat(width - left_width - right_width),
                Style::default().bg(bg),
            ));
            let button_width = unicode::display_width(CONFIRM_LABEL) as u16;
            app.confirm_button = Some(Rect::new(
                area.x + area.width - button_width,
                area.y,
                button_width,
                1,
            ));
            spans.extend(right);
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
