//! End-to-end behaviour of a scheduling session through the public API.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use shiftgrid::model::cell::CellKey;
use shiftgrid::model::config::{SchedulingConfig, default_work_items};
use shiftgrid::model::schedule::{Schedule, ScheduleEntry};
use shiftgrid::model::staff::{StaffProfile, StaffRow};
use shiftgrid::ops::assign::ScheduleError;
use shiftgrid::ops::selection::SelectOutcome;
use shiftgrid::ops::stats::efficiency;
use shiftgrid::state::SchedulingState;

fn staff(id: &str, name: &str) -> StaffRow {
    StaffRow {
        id: id.into(),
        name: name.into(),
        avatar: String::new(),
        tag: String::new(),
    }
}

fn session(rows: Vec<StaffRow>) -> SchedulingState {
    SchedulingState::new(rows, default_work_items(), &SchedulingConfig::default())
}

fn one_person() -> SchedulingState {
    session(vec![staff("1", "李婷")])
}

fn keys(state: &SchedulingState) -> Vec<String> {
    state.selection().iter().map(|k| k.to_string()).collect()
}

fn entry(work_id: &str, confirmed: bool) -> ScheduleEntry {
    ScheduleEntry {
        work_id: work_id.into(),
        confirmed,
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn assign_then_confirm() {
    let mut state = one_person();
    state.select_cell("1", 0);
    state.select_cell("1", 1);
    state.apply_work_item(Some("2")).unwrap();

    let expected: Schedule = [
        (CellKey::new("1", 0), entry("2", false)),
        (CellKey::new("1", 1), entry("2", false)),
    ]
    .into_iter()
    .collect();
    assert_eq!(state.schedule(), &expected);

    let stats = state.stats();
    assert_eq!(stats.total_hours, 2);
    assert_eq!(stats.scheduled_staff.iter().collect::<Vec<_>>(), vec!["1"]);
    assert_eq!(stats.unconfirmed_staff.iter().collect::<Vec<_>>(), vec!["1"]);

    state.confirm_all();
    assert!(state.schedule().iter().all(|(_, e)| e.confirmed));
    assert_eq!(state.schedule().len(), 2);
    assert!(state.stats().unconfirmed_staff.is_empty());
    assert!(state.selection().is_empty());
    assert!(!state.is_panel_open());
}

#[test]
fn undo_on_fresh_state() {
    let mut state = one_person();
    assert!(!state.undo());
    assert!(state.schedule().is_empty());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn toggle_to_empty() {
    let mut state = one_person();
    assert_eq!(state.select_cell("1", 5), SelectOutcome::Added);
    assert_eq!(state.select_cell("1", 5), SelectOutcome::Cleared);
    assert!(state.selection().is_empty());
}

#[test]
fn clicking_inside_a_multi_selection_keeps_it() {
    let mut state = one_person();
    state.select_cell("1", 5);
    state.select_cell("1", 6);
    assert_eq!(state.select_cell("1", 5), SelectOutcome::Unchanged);
    assert_eq!(keys(&state), vec!["1-5", "1-6"]);
}

#[test]
fn placeholder_guard() {
    let mut state = session(vec![staff("1", "李婷"), staff("2", "   ")]);
    let new_row = state.add_placeholder_row();

    for row in ["2", new_row.as_str()] {
        assert_eq!(
            state.select_cell(row, 3),
            SelectOutcome::NeedsStaff(row.to_string())
        );
        assert_eq!(state.staff_prompt(), Some(row));
        state.dismiss_staff_prompt();

        assert_eq!(state.start_drag(row, 3), SelectOutcome::Rejected);
        assert!(!state.is_dragging());
    }

    // A drag started on a real row never picks up placeholder cells
    state.start_drag("1", 3);
    state.extend_drag("2", 3);
    state.extend_drag(&new_row, 4);
    state.extend_drag("1", 4);
    state.end_drag();
    assert_eq!(keys(&state), vec!["1-3", "1-4"]);
}

#[test]
fn apply_then_select_replaces() {
    let mut state = one_person();
    state.select_cell("1", 0);
    state.select_cell("1", 1);
    state.select_cell("1", 2);
    state.apply_work_item(Some("1")).unwrap();

    assert_eq!(state.select_cell("1", 1), SelectOutcome::Replaced);
    assert_eq!(keys(&state), vec!["1-1"]);

    // The latch is spent: the next pick accumulates again
    assert_eq!(state.select_cell("1", 7), SelectOutcome::Added);
    assert_eq!(keys(&state), vec!["1-1", "1-7"]);
}

#[test]
fn drag_start_after_apply_replaces_too() {
    let mut state = one_person();
    state.select_cell("1", 0);
    state.apply_work_item(Some("1")).unwrap();
    state.start_drag("1", 9);
    state.extend_drag("1", 10);
    state.end_drag();
    assert_eq!(keys(&state), vec!["1-9", "1-10"]);
}

#[test]
fn clear_removes_keys() {
    let mut state = one_person();
    for slot in 8..12 {
        state.select_cell("1", slot);
    }
    state.apply_work_item(Some("3")).unwrap();
    assert_eq!(state.schedule().len(), 4);

    state.select_cell("1", 9);
    state.select_cell("1", 10);
    state.apply_work_item(None).unwrap();
    assert!(!state.schedule().contains(&CellKey::new("1", 9)));
    assert!(!state.schedule().contains(&CellKey::new("1", 10)));
    assert!(state.schedule().contains(&CellKey::new("1", 8)));
    assert_eq!(state.stats().total_hours, 2);
}

#[test]
fn reassignment_resets_confirmation() {
    let mut state = one_person();
    state.select_cell("1", 4);
    state.apply_work_item(Some("5")).unwrap();
    state.confirm_all();
    assert!(state.schedule().get(&CellKey::new("1", 4)).unwrap().confirmed);

    state.select_cell("1", 4);
    state.apply_work_item(Some("5")).unwrap();
    assert_eq!(
        state.schedule().get(&CellKey::new("1", 4)),
        Some(&entry("5", false))
    );
}

#[test]
fn undo_is_exact_inverse_of_one_step() {
    let mut state = session(vec![staff("1", "李婷"), staff("2", "张云")]);
    state.select_cell("1", 8);
    state.select_cell("2", 8);
    state.apply_work_item(Some("1")).unwrap();
    state.confirm_all();
    state.select_cell("2", 9);
    state.apply_work_item(Some("4")).unwrap();

    let before = state.schedule().clone();

    state.select_cell("1", 8);
    state.select_cell("2", 9);
    state.apply_work_item(Some("7")).unwrap();
    assert_ne!(state.schedule(), &before);
    assert!(state.undo());
    assert_eq!(state.schedule(), &before);

    state.confirm_all();
    assert!(state.undo());
    assert_eq!(state.schedule(), &before);

    state.select_cell("1", 8);
    state.apply_work_item(None).unwrap();
    assert!(state.undo());
    assert_eq!(state.schedule(), &before);
}

#[test]
fn undo_walks_back_to_empty() {
    let mut state = one_person();
    state.select_cell("1", 0);
    state.apply_work_item(Some("1")).unwrap();
    state.select_cell("1", 1);
    state.apply_work_item(Some("2")).unwrap();
    state.confirm_all();
    assert_eq!(state.history_depth(), 3);

    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(state.schedule().len(), 1);
    assert!(state.undo());
    assert!(state.schedule().is_empty());
    assert!(!state.undo());
}

#[test]
fn efficiency_guard() {
    let state = one_person();
    let stats = state.stats();
    assert_eq!(stats.efficiency, None);
    assert_eq!(stats.efficiency_label(), "--");

    assert_eq!(efficiency(9600, 4), Some(2400));
    assert_eq!(efficiency(9600, 0), None);

    let mut state = one_person();
    for slot in 0..4 {
        state.select_cell("1", slot);
    }
    state.apply_work_item(Some("1")).unwrap();
    assert_eq!(state.stats().efficiency, Some(2400));
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn empty_operations_are_no_ops() {
    let mut state = one_person();
    state.apply_work_item(Some("1")).unwrap();
    state.confirm_all();
    assert!(state.schedule().is_empty());
    assert_eq!(state.history_depth(), 0);
}

#[test]
fn unknown_work_item_changes_nothing() {
    let mut state = one_person();
    state.select_cell("1", 0);
    assert_eq!(
        state.apply_work_item(Some("nope")),
        Err(ScheduleError::UnknownWorkItem("nope".into()))
    );
    assert!(state.schedule().is_empty());
    assert_eq!(state.history_depth(), 0);
    assert_eq!(keys(&state), vec!["1-0"]);
}

#[test]
fn out_of_range_cells_are_rejected() {
    let mut state = one_person();
    assert_eq!(state.select_cell("1", 24), SelectOutcome::Rejected);
    assert_eq!(state.select_cell("ghost", 3), SelectOutcome::Rejected);
    assert!(state.selection().is_empty());
}

#[test]
fn staff_assignment_unlocks_a_row() {
    let mut state = one_person();
    let row = state.add_placeholder_row();
    assert!(matches!(state.select_cell(&row, 2), SelectOutcome::NeedsStaff(_)));

    state
        .assign_staff_to_row(&row, &StaffProfile::new("林青霞", "", "代班"))
        .unwrap();
    assert_eq!(state.staff_prompt(), None);
    assert_eq!(state.select_cell(&row, 2), SelectOutcome::Added);
    assert_eq!(state.roster().get(&row).unwrap().tag, "代班");
}

#[test]
fn panel_follows_selection_and_drag() {
    let mut state = one_person();
    assert!(!state.is_panel_open());
    state.select_cell("1", 0);
    assert!(state.is_panel_open());
    state.close_panel();
    assert!(!state.is_panel_open());
    assert!(state.selection().is_empty());
}

// ---------------------------------------------------------------------------
// Pointer gestures
// ---------------------------------------------------------------------------

#[test]
fn quick_release_is_a_click() {
    let mut state = one_person();
    let t0 = Instant::now();
    state.pointer_down("1", 6, t0);
    state.tick(t0 + Duration::from_millis(100));
    assert_eq!(
        state.pointer_up(t0 + Duration::from_millis(200)),
        Some(SelectOutcome::Added)
    );
    assert!(!state.is_dragging());
    assert_eq!(keys(&state), vec!["1-6"]);
}

#[test]
fn long_press_drags_and_never_clicks() {
    let mut state = one_person();
    let t0 = Instant::now();
    state.pointer_down("1", 6, t0);
    state.tick(t0 + Duration::from_millis(300));
    assert!(state.is_dragging());
    assert!(state.is_panel_open());
    assert_eq!(state.pulse_cell(t0 + Duration::from_millis(350)), Some(&CellKey::new("1", 6)));
    assert_eq!(state.pulse_cell(t0 + Duration::from_millis(800)), None);

    state.pointer_move("1", 7, t0 + Duration::from_millis(400));
    state.pointer_move("1", 8, t0 + Duration::from_millis(450));
    state.pointer_move("1", 7, t0 + Duration::from_millis(500));
    assert_eq!(state.pointer_up(t0 + Duration::from_millis(600)), None);
    assert!(!state.is_dragging());
    assert_eq!(keys(&state), vec!["1-6", "1-7", "1-8"]);
}

#[test]
fn late_release_without_tick_still_drags() {
    let mut state = one_person();
    let t0 = Instant::now();
    state.pointer_down("1", 2, t0);
    assert_eq!(state.pointer_up(t0 + Duration::from_millis(500)), None);
    assert_eq!(keys(&state), vec!["1-2"]);
    assert!(!state.is_dragging());
}

#[test]
fn press_on_placeholder_row_prompts_on_release() {
    let mut state = one_person();
    let row = state.add_placeholder_row();
    let t0 = Instant::now();
    state.pointer_down(&row, 2, t0);
    state.tick(t0 + Duration::from_secs(1));
    assert!(!state.is_dragging());
    assert_eq!(
        state.pointer_up(t0 + Duration::from_secs(2)),
        Some(SelectOutcome::NeedsStaff(row.clone()))
    );
    assert_eq!(state.staff_prompt(), Some(row.as_str()));
}
