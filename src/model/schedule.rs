use std::collections::BTreeMap;

use serde::Serialize;

use super::cell::CellKey;

/// The assignment held by one cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub work_id: String,
    pub confirmed: bool,
}

impl ScheduleEntry {
    /// A fresh (unconfirmed) assignment
    pub fn unconfirmed(work_id: impl Into<String>) -> Self {
        ScheduleEntry {
            work_id: work_id.into(),
            confirmed: false,
        }
    }
}

/// Sparse map of assigned cells. A cell with no assignment has no key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<CellKey, ScheduleEntry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CellKey) -> Option<&ScheduleEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &CellKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &ScheduleEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, key: CellKey, entry: ScheduleEntry) {
        self.entries.insert(key, entry);
    }

    pub(crate) fn remove(&mut self, key: &CellKey) -> Option<ScheduleEntry> {
        self.entries.remove(key)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut ScheduleEntry> {
        self.entries.values_mut()
    }
}

impl FromIterator<(CellKey, ScheduleEntry)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (CellKey, ScheduleEntry)>>(iter: I) -> Self {
        Schedule {
            entries: iter.into_iter().collect(),
        }
    }
}
