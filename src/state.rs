use std::time::{Duration, Instant};

use indexmap::IndexSet;
use tracing::debug;

use crate::model::cell::CellKey;
use crate::model::config::{GridConfig, SchedulingConfig};
use crate::model::schedule::Schedule;
use crate::model::staff::{Roster, StaffProfile, StaffRow};
use crate::model::work_item::{WorkCatalog, WorkItem};
use crate::ops::assign::{self, ScheduleError};
use crate::ops::gesture::{GestureEvent, GesturePhase, GestureTracker};
use crate::ops::history::History;
use crate::ops::roster_ops::{self, RosterError};
use crate::ops::selection::{SelectOutcome, SelectionTracker};
use crate::ops::stats::{self, ScheduleStats};

/// The whole scheduling session: roster, selection, schedule and undo history.
///
/// The presentation layer drives it through the inbound methods and reads it
/// back through the accessors on every render. It owns every invariant;
/// renderers hold no state of their own beyond cursors and scroll offsets.
#[derive(Debug, Clone)]
pub struct SchedulingState {
    roster: Roster,
    catalog: WorkCatalog,
    schedule: Schedule,
    history: History,
    selection: SelectionTracker,
    gesture: GestureTracker,
    /// Row waiting for a person to be picked
    staff_prompt: Option<String>,
    pulse: Option<(CellKey, Instant)>,
    pulse_window: Duration,
    total_revenue: u64,
}

impl SchedulingState {
    pub fn new(staff: Vec<StaffRow>, work_items: Vec<WorkItem>, settings: &SchedulingConfig) -> Self {
        SchedulingState {
            roster: Roster::new(staff),
            catalog: WorkCatalog::new(work_items),
            schedule: Schedule::new(),
            history: History::new(),
            selection: SelectionTracker::new(),
            gesture: GestureTracker::new(Duration::from_millis(settings.long_press_ms)),
            staff_prompt: None,
            pulse: None,
            pulse_window: Duration::from_millis(settings.pulse_ms),
            total_revenue: settings.total_revenue(),
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(
            config.staff.clone(),
            config.work_items.clone(),
            &config.scheduling,
        )
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog(&self) -> &WorkCatalog {
        &self.catalog
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn selection(&self) -> &IndexSet<CellKey> {
        self.selection.cells()
    }

    pub fn is_selected(&self, key: &CellKey) -> bool {
        self.selection.contains(key)
    }

    pub fn stats(&self) -> ScheduleStats {
        stats::compute_stats(&self.roster, &self.schedule, self.total_revenue)
    }

    /// The assignment panel shows while something is selected or a drag is live.
    pub fn is_panel_open(&self) -> bool {
        !self.selection.is_empty() || self.selection.is_dragging()
    }

    pub fn is_dragging(&self) -> bool {
        self.selection.is_dragging()
    }

    pub fn gesture_phase(&self) -> &GesturePhase {
        self.gesture.phase()
    }

    /// Row id the staff picker should fill, if a prompt is pending
    pub fn staff_prompt(&self) -> Option<&str> {
        self.staff_prompt.as_deref()
    }

    /// Cell that just started a drag, while its pulse is still showing
    pub fn pulse_cell(&self, now: Instant) -> Option<&CellKey> {
        match &self.pulse {
            Some((key, at)) if now.saturating_duration_since(*at) < self.pulse_window => Some(key),
            _ => None,
        }
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Plain click on a cell
    pub fn select_cell(&mut self, staff_id: &str, slot: usize) -> SelectOutcome {
        self.click(CellKey::new(staff_id, slot))
    }

    /// Long-press fired on a cell
    pub fn start_drag(&mut self, staff_id: &str, slot: usize) -> SelectOutcome {
        self.begin_drag_at(CellKey::new(staff_id, slot), Instant::now())
    }

    /// Pointer over a cell during a drag
    pub fn extend_drag(&mut self, staff_id: &str, slot: usize) -> SelectOutcome {
        self.selection
            .extend_drag(&self.roster, CellKey::new(staff_id, slot))
    }

    pub fn end_drag(&mut self) {
        self.selection.end_drag();
    }

    /// Close the assignment panel, dropping the selection
    pub fn close_panel(&mut self) {
        self.gesture.cancel();
        self.selection.end_drag();
        self.selection.clear();
    }

    fn click(&mut self, key: CellKey) -> SelectOutcome {
        let outcome = self.selection.toggle(&self.roster, key);
        if let SelectOutcome::NeedsStaff(row_id) = &outcome {
            debug!(row = %row_id, "cell on placeholder row, requesting staff");
            self.staff_prompt = Some(row_id.clone());
        }
        outcome
    }

    fn begin_drag_at(&mut self, key: CellKey, now: Instant) -> SelectOutcome {
        let outcome = self.selection.begin_drag(&self.roster, key.clone());
        if matches!(
            outcome,
            SelectOutcome::Added | SelectOutcome::Replaced | SelectOutcome::Unchanged
        ) {
            debug!(cell = %key, "drag started");
            self.pulse = Some((key, now));
        }
        outcome
    }

    // -----------------------------------------------------------------------
    // Pointer input (feeds the gesture machine)
    // -----------------------------------------------------------------------

    /// Pointer pressed on a cell. Resolution happens on `tick` or `pointer_up`.
    pub fn pointer_down(&mut self, staff_id: &str, slot: usize, now: Instant) {
        let key = CellKey::new(staff_id, slot);
        if !key.in_day() || !self.roster.contains(staff_id) {
            self.gesture.cancel();
            return;
        }
        let draggable = self.roster.is_schedulable(staff_id);
        self.gesture.press(key, now, draggable);
    }

    /// Let an expired long-press turn into a drag.
    pub fn tick(&mut self, now: Instant) {
        if let Some(GestureEvent::DragStart(key)) = self.gesture.poll(now)
            && self.begin_drag_at(key, now) == SelectOutcome::Rejected
        {
            self.gesture.cancel();
        }
    }

    pub fn pointer_move(&mut self, staff_id: &str, slot: usize, now: Instant) {
        self.tick(now);
        if let Some(GestureEvent::DragOver(key)) = self.gesture.hover(CellKey::new(staff_id, slot)) {
            self.selection.extend_drag(&self.roster, key);
        }
    }

    /// Pointer released. Returns the selection outcome when the press was a click.
    pub fn pointer_up(&mut self, now: Instant) -> Option<SelectOutcome> {
        self.tick(now);
        match self.gesture.release()? {
            GestureEvent::Click(key) => Some(self.click(key)),
            GestureEvent::DragEnd => {
                self.selection.end_drag();
                None
            }
            GestureEvent::DragStart(_) | GestureEvent::DragOver(_) => None,
        }
    }

    // -----------------------------------------------------------------------
    // Schedule mutations (undoable)
    // -----------------------------------------------------------------------

    /// Put a work item on every selected cell, or clear them with `None`.
    ///
    /// An empty selection changes nothing and records no history.
    pub fn apply_work_item(&mut self, work_id: Option<&str>) -> Result<(), ScheduleError> {
        assign::validate_work_id(&self.catalog, work_id)?;
        if self.selection.is_empty() {
            return Ok(());
        }
        self.history.push(self.schedule.clone());
        assign::apply_work_item(&mut self.schedule, self.selection.cells(), work_id);
        self.selection.mark_applied();
        debug!(
            cells = self.selection.len(),
            work = work_id.unwrap_or("<clear>"),
            "applied work item"
        );
        Ok(())
    }

    /// Confirm every assignment and close the panel.
    pub fn confirm_all(&mut self) {
        if !self.schedule.is_empty() {
            self.history.push(self.schedule.clone());
            let changed = assign::confirm_all(&mut self.schedule);
            debug!(changed, "confirmed schedule");
        }
        self.selection.clear();
    }

    /// Restore the schedule as it was before the last mutation.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.schedule = previous;
                debug!(remaining = self.history.len(), "undo");
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Roster
    // -----------------------------------------------------------------------

    pub fn add_placeholder_row(&mut self) -> String {
        let id = roster_ops::add_placeholder_row(&mut self.roster);
        debug!(row = %id, "added placeholder row");
        id
    }

    /// Open the staff picker for a row (any row may be re-assigned).
    pub fn request_staff_assignment(&mut self, row_id: &str) -> Result<(), RosterError> {
        if !self.roster.contains(row_id) {
            return Err(RosterError::NotFound(row_id.to_string()));
        }
        self.staff_prompt = Some(row_id.to_string());
        Ok(())
    }

    pub fn assign_staff_to_row(&mut self, row_id: &str, profile: &StaffProfile) -> Result<(), RosterError> {
        roster_ops::assign_staff(&mut self.roster, row_id, profile)?;
        if self.staff_prompt.as_deref() == Some(row_id) {
            self.staff_prompt = None;
        }
        debug!(row = %row_id, name = %profile.name, "assigned staff to row");
        Ok(())
    }

    pub fn dismiss_staff_prompt(&mut self) {
        self.staff_prompt = None;
    }
}
