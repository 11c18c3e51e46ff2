use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

const KEY_HINTS: &str = "Space select  v drag  1-9 apply  x clear  u undo  Enter confirm";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(message) = &app.status {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.yellow).bg(bg),
        ))
    } else if app.key_drag {
        Line::from(Span::styled(
            " -- DRAG --",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
    } else if app.show_key_hints {
        Line::from(Span::styled(
            format!(" {}", KEY_HINTS),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(" ".repeat(area.width as usize), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
