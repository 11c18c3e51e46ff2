use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Number of one-hour slots in a scheduling day
pub const SLOTS_PER_DAY: usize = 24;

/// Error type for parsing a cell key from its string form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellKeyError {
    #[error("cell key has no slot separator: {0}")]
    MissingSeparator(String),
    #[error("cell key has an empty staff id: {0}")]
    EmptyStaffId(String),
    #[error("invalid time slot in cell key: {0}")]
    InvalidSlot(String),
}

/// One grid cell: a staff row crossed with an hourly time slot.
///
/// The string form is `{staff_id}-{slot}` (e.g. `1-0`, `new-3-14`). Parsing
/// splits on the last `-`, so staff ids that contain dashes survive the round
/// trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    staff_id: String,
    slot: usize,
}

impl CellKey {
    pub fn new(staff_id: impl Into<String>, slot: usize) -> Self {
        CellKey {
            staff_id: staff_id.into(),
            slot,
        }
    }

    pub fn staff_id(&self) -> &str {
        &self.staff_id
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Whether the slot lies inside the scheduling day
    pub fn in_day(&self) -> bool {
        self.slot < SLOTS_PER_DAY
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.staff_id, self.slot)
    }
}

impl FromStr for CellKey {
    type Err = CellKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (staff_id, slot) = s
            .rsplit_once('-')
            .ok_or_else(|| CellKeyError::MissingSeparator(s.to_string()))?;
        if staff_id.is_empty() {
            return Err(CellKeyError::EmptyStaffId(s.to_string()));
        }
        let slot: usize = slot
            .parse()
            .map_err(|_| CellKeyError::InvalidSlot(s.to_string()))?;
        if slot >= SLOTS_PER_DAY {
            return Err(CellKeyError::InvalidSlot(s.to_string()));
        }
        Ok(CellKey::new(staff_id, slot))
    }
}

impl Serialize for CellKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Header label for a slot, e.g. `8~9`
pub fn slot_label(slot: usize) -> String {
    format!("{}~{}", slot, slot + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_grid_key_format() {
        assert_eq!(CellKey::new("1", 0).to_string(), "1-0");
        assert_eq!(CellKey::new("new-7", 23).to_string(), "new-7-23");
    }

    #[test]
    fn parse_splits_on_last_dash() {
        let key: CellKey = "new-7-23".parse().unwrap();
        assert_eq!(key.staff_id(), "new-7");
        assert_eq!(key.slot(), 23);
    }

    #[test]
    fn distinct_cells_never_collide() {
        // "1-11" must not be confused with staff "1-1" slot 1
        let a = CellKey::new("1", 11);
        let b = CellKey::new("1-1", 1);
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());
        assert_eq!(a.to_string().parse::<CellKey>().unwrap(), a);
        assert_eq!(b.to_string().parse::<CellKey>().unwrap(), b);
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert_eq!(
            "nodash".parse::<CellKey>(),
            Err(CellKeyError::MissingSeparator("nodash".into()))
        );
        assert_eq!(
            "-4".parse::<CellKey>(),
            Err(CellKeyError::EmptyStaffId("-4".into()))
        );
        assert_eq!(
            "1-x".parse::<CellKey>(),
            Err(CellKeyError::InvalidSlot("1-x".into()))
        );
        assert_eq!(
            "1-24".parse::<CellKey>(),
            Err(CellKeyError::InvalidSlot("1-24".into()))
        );
    }

    #[test]
    fn slot_bounds() {
        assert!(CellKey::new("1", 23).in_day());
        assert!(!CellKey::new("1", 24).in_day());
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&CellKey::new("2", 5)).unwrap();
        assert_eq!(json, "\"2-5\"");
    }

    #[test]
    fn slot_labels() {
        assert_eq!(slot_label(0), "0~1");
        assert_eq!(slot_label(8), "8~9");
        assert_eq!(slot_label(23), "23~24");
    }
}
