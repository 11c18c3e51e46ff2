use serde::{Deserialize, Serialize};

/// One row of the scheduling grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRow {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub tag: String,
}

impl StaffRow {
    /// A row with no person bound to it yet
    pub fn placeholder(id: impl Into<String>) -> Self {
        StaffRow {
            id: id.into(),
            name: String::new(),
            avatar: String::new(),
            tag: String::new(),
        }
    }

    /// Rows whose name is empty or whitespace are placeholders and cannot be scheduled.
    pub fn is_placeholder(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Overwrite the person-facing fields, keeping the row id
    pub fn fill(&mut self, profile: &StaffProfile) {
        self.name = profile.name.clone();
        self.avatar = profile.avatar.clone();
        self.tag = profile.tag.clone();
    }
}

/// The person-facing part of a row: what the staff picker offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub tag: String,
}

impl StaffProfile {
    pub fn new(name: &str, avatar: &str, tag: &str) -> Self {
        StaffProfile {
            name: name.to_string(),
            avatar: avatar.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Ordered, append-only list of staff rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    rows: Vec<StaffRow>,
    /// Counter for `new-{n}` placeholder ids
    pub(crate) next_placeholder: u64,
}

impl Roster {
    pub fn new(rows: Vec<StaffRow>) -> Self {
        Roster {
            rows,
            next_placeholder: 1,
        }
    }

    pub fn rows(&self) -> &[StaffRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StaffRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut StaffRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// True only for rows that exist and have a person bound to them
    pub fn is_schedulable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|r| !r.is_placeholder())
    }

    pub(crate) fn push(&mut self, row: StaffRow) {
        self.rows.push(row);
    }
}
