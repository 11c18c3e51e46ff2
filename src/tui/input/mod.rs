mod grid;
mod mouse;
mod picker;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::App;

use grid::handle_grid_key;
use picker::handle_picker_key;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Staff picker intercepts all keys
    if app.is_picker_open() {
        handle_picker_key(app, key);
        return;
    }

    handle_grid_key(app, key);
}

/// Handle a mouse event; `now` drives long-press detection
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    mouse::handle_mouse(app, mouse, now);
}
