use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::cell::SLOTS_PER_DAY;
use super::staff::{StaffProfile, StaffRow};
use super::work_item::WorkItem;

/// Configuration from shiftgrid.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub store: StoreInfo,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    /// Initial roster seed
    #[serde(default = "default_staff")]
    pub staff: Vec<StaffRow>,
    /// Work item catalog, in panel order
    #[serde(default = "default_work_items")]
    pub work_items: Vec<WorkItem>,
    /// People offered by the staff picker
    #[serde(default = "default_candidates")]
    pub candidates: Vec<StaffProfile>,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            store: StoreInfo::default(),
            scheduling: SchedulingConfig::default(),
            staff: default_staff(),
            work_items: default_work_items(),
            candidates: default_candidates(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default = "default_store_name")]
    pub name: String,
    #[serde(default = "default_brand")]
    pub brand: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        StoreInfo {
            name: default_store_name(),
            brand: default_brand(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Revenue credited to every hourly slot
    #[serde(default = "default_revenue_per_slot")]
    pub revenue_per_slot: u64,
    /// Hold time before a press turns into a drag
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
    /// How long the drag-start pulse stays visible
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u64,
    /// Leftmost slot shown when the grid opens
    #[serde(default = "default_first_visible_slot")]
    pub first_visible_slot: usize,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        SchedulingConfig {
            revenue_per_slot: default_revenue_per_slot(),
            long_press_ms: default_long_press_ms(),
            pulse_ms: default_pulse_ms(),
            first_visible_slot: default_first_visible_slot(),
        }
    }
}

impl SchedulingConfig {
    /// Fixed revenue for a full day of slots
    pub fn total_revenue(&self) -> u64 {
        (SLOTS_PER_DAY as u64).saturating_mul(self.revenue_per_slot)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_store_name() -> String {
    "青团咖啡金之源店".to_string()
}

fn default_brand() -> String {
    "青团咖啡".to_string()
}

fn default_revenue_per_slot() -> u64 {
    400
}

fn default_long_press_ms() -> u64 {
    300
}

fn default_pulse_ms() -> u64 {
    400
}

fn default_first_visible_slot() -> usize {
    8
}

const AVATAR_BASE: &str = "https://images.unsplash.com";

fn avatar(photo: &str) -> String {
    format!("{}/{}?w=200&h=200&fit=crop&crop=faces", AVATAR_BASE, photo)
}

/// Built-in roster seed
pub fn default_staff() -> Vec<StaffRow> {
    [
        ("1", "李婷", "photo-1438761681033-6461ffad8d80", "自有员工"),
        ("2", "张云", "photo-1544005313-94ddf0286df2", ""),
        ("3", "陈曦", "photo-1507003211169-0a1dd7228f2d", ""),
        ("4", "徐春燕", "photo-1487412720507-e7ab37603c6f", ""),
    ]
    .into_iter()
    .map(|(id, name, photo, tag)| StaffRow {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar(photo),
        tag: tag.to_string(),
    })
    .collect()
}

/// Built-in work item catalog
pub fn default_work_items() -> Vec<WorkItem> {
    vec![
        WorkItem::new("1", "摇杯", "emerald"),
        WorkItem::new("2", "出杯", "orange"),
        WorkItem::new("3", "后厨", "blue"),
        WorkItem::new("4", "机动", "sky"),
        WorkItem::new("5", "打烊", "yellow"),
        WorkItem::new("6", "保洁", "purple"),
        WorkItem::new("7", "休息", "gray"),
        WorkItem::new("8", "上班", "slate"),
        WorkItem::new("9", "开台", "red"),
    ]
}

/// Built-in staff picker entries
pub fn default_candidates() -> Vec<StaffProfile> {
    [
        ("王嘉尔", "photo-1506794778202-cad84cf45f1d", "店长"),
        ("肖战", "photo-1500648767791-00dcc994a43e", "全职"),
        ("迪丽热巴", "photo-1494790108377-be9c29b29330", "兼职"),
        ("周杰伦", "photo-1539571696357-5a69c17a67c6", "自有员工"),
        ("易烊千玺", "photo-1507003211169-0a1dd7228f2d", "自有员工"),
        ("林青霞", "photo-1487412720507-e7ab37603c6f", "代班"),
    ]
    .into_iter()
    .map(|(name, photo, tag)| StaffProfile::new(name, &avatar(photo), tag))
    .collect()
}
