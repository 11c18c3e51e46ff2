use crate::model::staff::{Roster, StaffProfile, StaffRow};

/// Error type for roster operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("staff row not found: {0}")]
    NotFound(String),
}

/// Append an empty placeholder row and return its id (`new-1`, `new-2`, ...).
pub fn add_placeholder_row(roster: &mut Roster) -> String {
    let id = loop {
        let candidate = format!("new-{}", roster.next_placeholder);
        roster.next_placeholder += 1;
        if !roster.contains(&candidate) {
            break candidate;
        }
    };
    roster.push(StaffRow::placeholder(id.clone()));
    id
}

/// Bind a person to an existing row (placeholder or not).
pub fn assign_staff(roster: &mut Roster, row_id: &str, profile: &StaffProfile) -> Result<(), RosterError> {
    let row = roster
        .get_mut(row_id)
        .ok_or_else(|| RosterError::NotFound(row_id.to_string()))?;
    row.fill(profile);
    Ok(())
}
