use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::schedule::Schedule;
use crate::model::staff::Roster;

/// Summary figures shown under the grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    /// Named rows with at least one assignment
    pub scheduled_staff: BTreeSet<String>,
    /// One hour per counted entry
    pub total_hours: usize,
    /// Scheduled rows with at least one unconfirmed entry
    pub unconfirmed_staff: BTreeSet<String>,
    /// Revenue per scheduled hour, `None` when nothing is scheduled
    pub efficiency: Option<u64>,
}

impl ScheduleStats {
    pub fn has_unconfirmed(&self, staff_id: &str) -> bool {
        self.unconfirmed_staff.contains(staff_id)
    }

    /// Efficiency as displayed: the number, or `--`
    pub fn efficiency_label(&self) -> String {
        self.efficiency
            .map_or_else(|| "--".to_string(), |e| e.to_string())
    }
}

/// Recompute the summary from the roster and schedule.
///
/// Entries count only when they carry a work id and belong to a named row;
/// placeholder and unknown rows never count.
pub fn compute_stats(roster: &Roster, schedule: &Schedule, total_revenue: u64) -> ScheduleStats {
    let mut stats = ScheduleStats::default();
    for (key, entry) in schedule.iter() {
        if entry.work_id.is_empty() || !roster.is_schedulable(key.staff_id()) {
            continue;
        }
        stats.scheduled_staff.insert(key.staff_id().to_string());
        stats.total_hours += 1;
        if !entry.confirmed {
            stats.unconfirmed_staff.insert(key.staff_id().to_string());
        }
    }
    stats.efficiency = efficiency(total_revenue, stats.total_hours);
    stats
}

/// `round(revenue / hours)` with halves rounded up; `None` for zero hours.
pub fn efficiency(total_revenue: u64, hours: usize) -> Option<u64> {
    if hours == 0 {
        return None;
    }
    let (revenue, hours) = (total_revenue as u128, hours as u128);
    let rounded = (2 * revenue + hours) / (2 * hours);
    Some(u64::try_from(rounded).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cell::CellKey;
    use crate::model::schedule::ScheduleEntry;
    use crate::model::staff::StaffRow;
    use pretty_assertions::assert_eq;

    fn roster() -> Roster {
        let mut rows = vec![
            StaffRow::placeholder("1"),
            StaffRow::placeholder("2"),
            StaffRow::placeholder("new-1"),
        ];
        rows[0].name = "李婷".into();
        rows[1].name = "张云".into();
        Roster::new(rows)
    }

    fn entry(work: &str, confirmed: bool) -> ScheduleEntry {
        ScheduleEntry {
            work_id: work.into(),
            confirmed,
        }
    }

    #[test]
    fn empty_schedule_has_no_efficiency() {
        let stats = compute_stats(&roster(), &Schedule::new(), 9600);
        assert_eq!(stats.total_hours, 0);
        assert_eq!(stats.efficiency, None);
        assert_eq!(stats.efficiency_label(), "--");
    }

    #[test]
    fn four_hours_gives_2400() {
        assert_eq!(efficiency(9600, 4), Some(2400));
    }

    #[test]
    fn efficiency_rounds_half_up() {
        assert_eq!(efficiency(9600, 7), Some(1371)); // 1371.43
        assert_eq!(efficiency(9600, 9), Some(1067)); // 1066.67
        assert_eq!(efficiency(5, 2), Some(3)); // 2.5
        assert_eq!(efficiency(9600, 0), None);
    }

    #[test]
    fn efficiency_handles_large_revenue() {
        assert_eq!(efficiency(u64::MAX, 1), Some(u64::MAX));
        assert_eq!(efficiency(u64::MAX, 2), Some(u64::MAX / 2 + 1));
    }

    #[test]
    fn counts_only_named_rows_with_work() {
        let schedule: Schedule = [
            (CellKey::new("1", 0), entry("2", false)),
            (CellKey::new("1", 1), entry("2", true)),
            (CellKey::new("2", 0), entry("3", true)),
            (CellKey::new("new-1", 0), entry("3", false)),
            (CellKey::new("ghost", 0), entry("3", false)),
            (CellKey::new("2", 1), entry("", false)),
        ]
        .into_iter()
        .collect();
        let stats = compute_stats(&roster(), &schedule, 9600);
        assert_eq!(stats.total_hours, 3);
        assert_eq!(
            stats.scheduled_staff.iter().cloned().collect::<Vec<_>>(),
            vec!["1", "2"]
        );
        assert_eq!(
            stats.unconfirmed_staff.iter().cloned().collect::<Vec<_>>(),
            vec!["1"]
        );
        assert!(stats.has_unconfirmed("1"));
        assert!(!stats.has_unconfirmed("2"));
        assert_eq!(stats.efficiency, Some(3200));
        assert_eq!(stats.efficiency_label(), "3200");
    }
}
