use crate::model::cell::CellKey;
use crate::model::schedule::{Schedule, ScheduleEntry};
use crate::model::work_item::WorkCatalog;

/// Error type for schedule operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("work item not found: {0}")]
    UnknownWorkItem(String),
}

/// Check a work id against the catalog. `None` (clear) is always valid.
pub fn validate_work_id(catalog: &WorkCatalog, work_id: Option<&str>) -> Result<(), ScheduleError> {
    match work_id {
        Some(id) if !catalog.contains(id) => Err(ScheduleError::UnknownWorkItem(id.to_string())),
        _ => Ok(()),
    }
}

/// Place `work_id` on every cell, or remove the cells' entries when it is `None`.
/// A (re)assigned cell is always unconfirmed.
pub fn apply_work_item<'a>(
    schedule: &mut Schedule,
    cells: impl IntoIterator<Item = &'a CellKey>,
    work_id: Option<&str>,
) {
    for key in cells {
        match work_id {
            Some(id) => schedule.insert(key.clone(), ScheduleEntry::unconfirmed(id)),
            None => {
                schedule.remove(key);
            }
        }
    }
}

/// Mark every existing entry confirmed. Returns how many changed.
pub fn confirm_all(schedule: &mut Schedule) -> usize {
    let mut changed = 0;
    for entry in schedule.values_mut() {
        if !entry.confirmed {
            entry.confirmed = true;
            changed += 1;
        }
    }
    changed
}
