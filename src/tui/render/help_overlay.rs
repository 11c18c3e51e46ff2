use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 90, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Grid", header_style)));
    add_binding(&mut lines, " \u{2190}\u{2191}\u{2193}\u{2192}/hjkl", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " Space", "Select / deselect cell", key_style, desc_style);
    add_binding(&mut lines, " v", "Start / end drag selection", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Close panel", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Schedule", header_style)));
    add_binding(&mut lines, " 1-9", "Apply work item N", key_style, desc_style);
    add_binding(&mut lines, " 0/x", "Clear selected cells", key_style, desc_style);
    add_binding(&mut lines, " u", "Undo", key_style, desc_style);
    add_binding(&mut lines, " Enter", "Confirm all", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Staff", header_style)));
    add_binding(&mut lines, " a", "Add row", key_style, desc_style);
    add_binding(&mut lines, " s", "Pick person for row", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Mouse", header_style)));
    add_binding(&mut lines, " click", "Select / deselect cell", key_style, desc_style);
    add_binding(&mut lines, " hold+drag", "Select a range", key_style, desc_style);
    add_binding(&mut lines, " wheel", "Scroll hours", key_style, desc_style);
    lines.push(Line::from(""));

    // Global keys
    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
