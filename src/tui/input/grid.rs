use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::selection::SelectOutcome;
use crate::tui::app::App;

pub(super) fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cursor movement (extends a keyboard drag)
        KeyCode::Up | KeyCode::Char('k') => move_and_extend(app, -1, 0),
        KeyCode::Down | KeyCode::Char('j') => move_and_extend(app, 1, 0),
        KeyCode::Left | KeyCode::Char('h') => move_and_extend(app, 0, -1),
        KeyCode::Right | KeyCode::Char('l') => move_and_extend(app, 0, 1),

        KeyCode::Char(' ') => {
            if let Some(key) = app.cursor_key() {
                let outcome = app.state.select_cell(key.staff_id(), key.slot());
                app.note_outcome(&outcome);
            }
        }
        KeyCode::Char('v') => toggle_key_drag(app),

        // Assignment
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(position) = c.to_digit(10) {
                app.apply_nth(position as usize);
            }
        }
        KeyCode::Char('0') | KeyCode::Char('x') => app.apply(None),
        KeyCode::Char('u') => app.undo(),
        KeyCode::Enter => app.confirm_all(),

        // Roster
        KeyCode::Char('a') => app.add_row(),
        KeyCode::Char('s') => app.open_picker(app.cursor_row),

        KeyCode::Esc => app.close_panel(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn move_and_extend(app: &mut App, d_row: isize, d_slot: isize) {
    app.sync_key_drag();
    app.move_cursor(d_row, d_slot);
    if app.key_drag
        && let Some(key) = app.cursor_key()
    {
        app.state.extend_drag(key.staff_id(), key.slot());
    }
}

/// `v` starts a drag at the cursor, or ends the one in progress
fn toggle_key_drag(app: &mut App) {
    app.sync_key_drag();
    if app.key_drag {
        app.end_key_drag();
        return;
    }
    let Some(key) = app.cursor_key() else {
        return;
    };
    match app.state.start_drag(key.staff_id(), key.slot()) {
        SelectOutcome::Rejected => {
            // A placeholder row can't start a drag; offer the picker instead
            if !app.state.roster().is_schedulable(key.staff_id()) {
                app.open_picker(app.cursor_row);
            }
            app.status = Some("Pick a person for this row first".into());
        }
        _ => app.key_drag = true,
    }
}
