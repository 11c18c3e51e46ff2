pub mod grid_view;
pub mod header;
pub mod help_overlay;
mod helpers;
pub mod staff_picker;
pub mod status_row;
pub mod summary_bar;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod work_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let panel_height = if app.state.is_panel_open() {
        work_panel::panel_height(app, area.width)
    } else {
        0
    };

    // Layout: header | grid | panel (when open) | summary | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // header
            Constraint::Min(3),               // grid
            Constraint::Length(panel_height), // assignment panel
            Constraint::Length(1),            // summary bar
            Constraint::Length(1),            // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    grid_view::render_grid(frame, app, chunks[1]);

    app.panel_buttons.clear();
    if panel_height > 0 {
        work_panel::render_work_panel(frame, app, chunks[2]);
    }

    summary_bar::render_summary_bar(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Popups (rendered on top of everything)
    app.picker_hits.clear();
    if app.is_picker_open() {
        staff_picker::render_staff_picker(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
