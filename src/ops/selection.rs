use indexmap::IndexSet;

use crate::model::cell::CellKey;
use crate::model::staff::Roster;

/// What a selection call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Cell appended to the selection
    Added,
    /// Selection replaced by this one cell (first pick after an apply)
    Replaced,
    /// The sole selected cell was toggled off
    Cleared,
    /// Cell was already part of a multi-cell selection
    Unchanged,
    /// Row has no person yet; the caller should open the staff picker for it
    NeedsStaff(String),
    /// Unknown row or slot outside the day
    Rejected,
}

/// The set of selected cells plus the drag flag and the "just applied" latch.
///
/// The latch is set after a work item is applied and consumed by the next
/// selection that adds a cell, which then starts a fresh selection instead of
/// accumulating into the one that was just placed.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    cells: IndexSet<CellKey>,
    just_applied: bool,
    dragging: bool,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &IndexSet<CellKey> {
        &self.cells
    }

    pub fn contains(&self, key: &CellKey) -> bool {
        self.cells.contains(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn just_applied(&self) -> bool {
        self.just_applied
    }

    /// Arm the latch after an apply
    pub fn mark_applied(&mut self) {
        self.just_applied = true;
    }

    /// Plain click on a cell.
    pub fn toggle(&mut self, roster: &Roster, key: CellKey) -> SelectOutcome {
        if let Some(outcome) = guard(roster, &key) {
            return outcome;
        }
        if self.cells.len() == 1 && self.cells.contains(&key) {
            self.cells.clear();
            return SelectOutcome::Cleared;
        }
        self.add_or_replace(key)
    }

    /// Long-press fired on a cell: enter drag mode and pick the cell.
    pub fn begin_drag(&mut self, roster: &Roster, key: CellKey) -> SelectOutcome {
        if let Some(outcome) = guard(roster, &key) {
            // No drag starts from a placeholder row; the release is a click instead
            return match outcome {
                SelectOutcome::NeedsStaff(_) => SelectOutcome::Rejected,
                other => other,
            };
        }
        self.dragging = true;
        self.add_or_replace(key)
    }

    /// Pointer moved over a cell during a drag. Never removes cells.
    pub fn extend_drag(&mut self, roster: &Roster, key: CellKey) -> SelectOutcome {
        if !self.dragging || guard(roster, &key).is_some() {
            return SelectOutcome::Rejected;
        }
        if self.cells.insert(key) {
            SelectOutcome::Added
        } else {
            SelectOutcome::Unchanged
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    fn add_or_replace(&mut self, key: CellKey) -> SelectOutcome {
        if self.just_applied {
            self.just_applied = false;
            self.cells.clear();
            self.cells.insert(key);
            return SelectOutcome::Replaced;
        }
        if self.cells.insert(key) {
            SelectOutcome::Added
        } else {
            SelectOutcome::Unchanged
        }
    }
}

/// Reject cells that may never enter the selection
fn guard(roster: &Roster, key: &CellKey) -> Option<SelectOutcome> {
    if !key.in_day() {
        return Some(SelectOutcome::Rejected);
    }
    match roster.get(key.staff_id()) {
        None => Some(SelectOutcome::Rejected),
        Some(row) if row.is_placeholder() => {
            Some(SelectOutcome::NeedsStaff(row.id.clone()))
        }
        Some(_) => None,
    }
}
