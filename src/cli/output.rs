use serde::Serialize;

use crate::model::config::GridConfig;
use crate::model::staff::{StaffProfile, StaffRow};
use crate::model::work_item::WorkItem;
use crate::util::unicode::pad_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CatalogJson<'a> {
    pub store: &'a str,
    pub brand: &'a str,
    pub revenue_per_slot: u64,
    pub staff: Vec<StaffJson<'a>>,
    pub work_items: &'a [WorkItem],
    pub candidates: &'a [StaffProfile],
}

#[derive(Serialize)]
pub struct StaffJson<'a> {
    #[serde(flatten)]
    pub row: &'a StaffRow,
    pub placeholder: bool,
}

pub fn catalog_json(config: &GridConfig) -> CatalogJson<'_> {
    CatalogJson {
        store: &config.store.name,
        brand: &config.store.brand,
        revenue_per_slot: config.scheduling.revenue_per_slot,
        staff: config
            .staff
            .iter()
            .map(|row| StaffJson {
                row,
                placeholder: row.is_placeholder(),
            })
            .collect(),
        work_items: &config.work_items,
        candidates: &config.candidates,
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Plain-text listing of the roster seed and work items
pub fn format_catalog(config: &GridConfig) -> String {
    let mut lines = vec![format!("{} ({})", config.store.name, config.store.brand)];

    lines.push(String::new());
    lines.push("Staff".to_string());
    let id_w = config.staff.iter().map(|r| r.id.len()).max().unwrap_or(0);
    for row in &config.staff {
        let name = if row.is_placeholder() {
            "(unassigned)"
        } else {
            row.name.as_str()
        };
        let line = format!(
            "  {}  {}  {}",
            pad_to_width(&row.id, id_w),
            pad_to_width(name, 12),
            row.tag
        );
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("Work items".to_string());
    let id_w = config.work_items.iter().map(|w| w.id.len()).max().unwrap_or(0);
    for (i, item) in config.work_items.iter().enumerate() {
        let key = if i < 9 {
            format!("[{}]", i + 1)
        } else {
            "   ".to_string()
        };
        let line = format!(
            "  {} {}  {}  {}",
            key,
            pad_to_width(&item.id, id_w),
            pad_to_width(&item.label, 8),
            item.color_token
        );
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::SchedulingConfig;
    use insta::assert_snapshot;

    fn small_config() -> GridConfig {
        GridConfig {
            staff: vec![
                StaffRow {
                    id: "1".into(),
                    name: "李婷".into(),
                    avatar: String::new(),
                    tag: "自有员工".into(),
                },
                StaffRow::placeholder("2"),
            ],
            work_items: vec![
                WorkItem::new("1", "摇杯", "emerald"),
                WorkItem::new("2", "出杯", "orange"),
            ],
            scheduling: SchedulingConfig::default(),
            ..GridConfig::default()
        }
    }

    #[test]
    fn text_catalog() {
        assert_snapshot!(format_catalog(&small_config()), @r"
        青团咖啡金之源店 (青团咖啡)

        Staff
          1  李婷          自有员工
          2  (unassigned)

        Work items
          [1] 1  摇杯      emerald
          [2] 2  出杯      orange
        ");
    }

    #[test]
    fn json_catalog_flags_placeholders() {
        let config = small_config();
        let value = serde_json::to_value(catalog_json(&config)).unwrap();
        assert_eq!(value["staff"][0]["name"], "李婷");
        assert_eq!(value["staff"][0]["placeholder"], false);
        assert_eq!(value["staff"][1]["placeholder"], true);
        assert_eq!(value["work_items"][1]["color"], "orange");
        assert_eq!(value["revenue_per_slot"], 400);
    }
}
