use crate::model::schedule::Schedule;

/// Snapshot-based undo over the schedule. Undo only; nothing is kept for redo.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Schedule>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the schedule as it is before a mutation.
    pub fn push(&mut self, snapshot: Schedule) {
        self.snapshots.push(snapshot);
    }

    /// Take the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<Schedule> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
