use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, PanelAction};
use crate::util::unicode;

struct Button {
    rect: Rect,
    label: String,
    action: PanelAction,
}

/// Lay buttons out left to right, wrapping onto new lines inside `inner`
fn layout_buttons(app: &App, inner: Rect) -> Vec<Button> {
    let mut entries = vec![("清除".to_string(), PanelAction::Clear)];
    for (i, item) in app.state.catalog().items().iter().enumerate() {
        let label = if i < 9 {
            format!("{} {}", i + 1, item.label)
        } else {
            item.label.clone()
        };
        entries.push((label, PanelAction::Apply(item.id.clone())));
    }
    entries.push(("关闭".to_string(), PanelAction::Close));

    let mut buttons = Vec::with_capacity(entries.len());
    let (mut x, mut y) = (inner.x, inner.y);
    let right = inner.x + inner.width;
    for (label, action) in entries {
        let label = format!(" {} ", label);
        let width = (unicode::display_width(&label) as u16).min(inner.width);
        if x > inner.x && x + width > right {
            x = inner.x;
            y += 1;
        }
        buttons.push(Button {
            rect: Rect::new(x, y, width, 1),
            label,
            action,
        });
        x += width + 1;
    }
    buttons
}

/// Total height of the panel (borders included) at a given terminal width
pub fn panel_height(app: &App, width: u16) -> u16 {
    // Only the width matters for wrapping
    let inner = Rect::new(0, 0, width.saturating_sub(2).max(1), 1);
    let lines = layout_buttons(app, inner)
        .last()
        .map_or(1, |b| b.rect.y + 1);
    lines + 2
}

/// Render the assignment panel and record its buttons for mouse hits
pub fn render_work_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let title = format!(" 已选 {} 格 ", app.state.selection().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons = layout_buttons(app, inner);
    app.panel_buttons.clear();
    for button in buttons {
        // Skip anything that wrapped past the panel
        if button.rect.y >= inner.y + inner.height {
            continue;
        }
        let style = match &button.action {
            PanelAction::Clear => Style::default().fg(app.theme.red).bg(bg),
            PanelAction::Close => Style::default().fg(app.theme.dim).bg(bg),
            PanelAction::Apply(id) => {
                let color = app
                    .state
                    .catalog()
                    .get(id)
                    .map_or(app.theme.dim, |item| app.theme.work_color(&item.color_token));
                Style::default()
                    .fg(bg)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            }
        };
        frame.render_widget(
            Paragraph::new(Span::styled(button.label, style)),
            button.rect,
        );
        app.panel_buttons.push((button.rect, button.action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buttons_wrap_to_width() {
        let app = default_app();
        // " 清除 " = 6, " 1 摇杯 " = 8, " 关闭 " = 6
        // 78 inner columns: clear + 8 items fit on the first line
        assert_eq!(panel_height(&app, 80), 4);
        // very wide: single line
        assert_eq!(panel_height(&app, 200), 3);
    }

    #[test]
    fn panel_records_buttons() {
        let mut app = default_app();
        app.state.select_cell("1", 8);
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_work_panel(frame, &mut app, area);
        });
        let text = compact(&output);
        assert!(text.contains("已选1格"));
        assert!(text.contains("清除"));
        assert!(text.contains("1摇杯"));
        assert!(text.contains("关闭"));

        assert_eq!(app.panel_buttons.len(), 11);
        assert_eq!(app.panel_buttons[0].1, PanelAction::Clear);
        assert_eq!(app.panel_buttons[1].1, PanelAction::Apply("1".into()));
        assert_eq!(app.panel_buttons[0].0, Rect::new(1, 1, 6, 1));
        assert_eq!(app.panel_buttons[1].0, Rect::new(8, 1, 8, 1));
        assert_eq!(app.panel_buttons[10].1, PanelAction::Close);
        assert_eq!(app.panel_buttons[10].0.y, 2);
    }
}
