use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_picker_key(app: &mut App, key: KeyEvent) {
    let count = app.candidates.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.picker_cursor = app.picker_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.picker_cursor + 1 < count {
                app.picker_cursor += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.pick_candidate(app.picker_cursor),
        KeyCode::Esc => app.state.dismiss_staff_prompt(),
        _ => {}
    }
}
