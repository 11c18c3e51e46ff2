use std::time::Instant;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::tui::app::App;
use crate::tui::layout::GridHit;

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    rect.contains(Position { x, y })
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => press(app, x, y, now),
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(GridHit::Cell { row, slot }) = app.layout.hit(x, y)
                && let Some(id) = row_id(app, row)
            {
                app.state.pointer_move(&id, slot, now);
                if app.state.is_dragging() {
                    app.cursor_row = row;
                    app.cursor_slot = slot;
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(outcome) = app.state.pointer_up(now) {
                app.note_outcome(&outcome);
            }
            app.sync_key_drag();
        }
        MouseEventKind::ScrollDown if mouse.modifiers.contains(KeyModifiers::SHIFT) => {
            app.scroll_rows(1)
        }
        MouseEventKind::ScrollUp if mouse.modifiers.contains(KeyModifiers::SHIFT) => {
            app.scroll_rows(-1)
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => app.scroll_slots(1),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => app.scroll_slots(-1),
        _ => {}
    }
}

fn press(app: &mut App, x: u16, y: u16, now: Instant) {
    app.status = None;

    if app.show_help {
        app.show_help = false;
        return;
    }

    // Picker is modal: a click on an entry picks it, anywhere else dismisses
    if app.is_picker_open() {
        let hit = app
            .picker_hits
            .iter()
            .find(|(rect, _)| contains(rect, x, y))
            .map(|(_, index)| *index);
        match hit {
            Some(index) => app.pick_candidate(index),
            None => app.state.dismiss_staff_prompt(),
        }
        return;
    }

    if let Some(action) = app
        .panel_buttons
        .iter()
        .find(|(rect, _)| contains(rect, x, y))
        .map(|(_, action)| action.clone())
    {
        app.run_panel_action(&action);
        return;
    }

    if app.confirm_button.is_some_and(|rect| contains(&rect, x, y)) {
        app.confirm_all();
        return;
    }

    match app.layout.hit(x, y) {
        Some(GridHit::Cell { row, slot }) => {
            if let Some(id) = row_id(app, row) {
                app.cursor_row = row;
                app.cursor_slot = slot;
                app.state.pointer_down(&id, slot, now);
            }
        }
        Some(GridHit::RowHeader { row }) => app.open_picker(row),
        Some(GridHit::AddRow) => app.add_row(),
        None => {}
    }
}

fn row_id(app: &App, row: usize) -> Option<String> {
    app.state.roster().rows().get(row).map(|r| r.id.clone())
}
