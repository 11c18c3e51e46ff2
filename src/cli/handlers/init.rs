use crate::cli::commands::InitArgs;
use crate::io::config_io;

const CONFIG_TEMPLATE: &str = r##"# shiftgrid configuration
# Every section is optional; anything left out falls back to built-in defaults.

[store]
name = "青团咖啡金之源店"
brand = "青团咖啡"

[scheduling]
# Revenue credited to each of the 24 hourly slots.
# Efficiency = 24 * revenue_per_slot / scheduled hours.
revenue_per_slot = 400
# Hold a cell this long to start a drag selection.
long_press_ms = 300
pulse_ms = 400
# Leftmost hour shown when the grid opens.
first_visible_slot = 8

# --- Roster ---
# Rows with an empty name are placeholders: pick a person before scheduling them.

[[staff]]
id = "1"
name = "李婷"
tag = "自有员工"

[[staff]]
id = "2"
name = "张云"

[[staff]]
id = "3"
name = "陈曦"

[[staff]]
id = "4"
name = "徐春燕"

# --- Work items ---
# Shown in the assignment panel in this order; keys 1-9 pick the first nine.
# color: emerald, orange, blue, sky, yellow, purple, gray, slate, red, or "#RRGGBB"

[[work_items]]
id = "1"
label = "摇杯"
color = "emerald"

[[work_items]]
id = "2"
label = "出杯"
color = "orange"

[[work_items]]
id = "3"
label = "后厨"
color = "blue"

[[work_items]]
id = "4"
label = "机动"
color = "sky"

[[work_items]]
id = "5"
label = "打烊"
color = "yellow"

[[work_items]]
id = "6"
label = "保洁"
color = "purple"

[[work_items]]
id = "7"
label = "休息"
color = "gray"

[[work_items]]
id = "8"
label = "上班"
color = "slate"

[[work_items]]
id = "9"
label = "开台"
color = "red"

# --- Staff picker ---
# Uncomment to replace the built-in candidate list.
#
# [[candidates]]
# name = "王嘉尔"
# tag = "店长"

# --- UI Customization ---
# Uncomment and edit to override defaults.

[ui]
# show_key_hints = false
#
# [ui.colors]
# background = "#0C001B"
# text = "#B0AAFF"
# highlight = "#FB4196"
# dim = "#7D78BF"
"##;

/// Render the starter config, optionally with a different store name.
pub(crate) fn render_config(store: Option<&str>) -> Result<toml_edit::DocumentMut, config_io::ConfigError> {
    let mut doc: toml_edit::DocumentMut = CONFIG_TEMPLATE.parse()?;
    if let Some(name) = store {
        config_io::set_store_name(&mut doc, name);
    }
    Ok(doc)
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = args.store.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let doc = render_config(store)?;
    config_io::write_config(&args.path, &doc, args.force)?;
    println!("Wrote {}", args.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{GridConfig, default_work_items};

    #[test]
    fn template_is_a_valid_config() {
        let doc = render_config(None).unwrap();
        let config: GridConfig = toml::from_str(&doc.to_string()).unwrap();
        config_io::validate_config(&config).unwrap();
        assert_eq!(config.staff.len(), 4);
        assert_eq!(config.work_items, default_work_items());
        assert_eq!(config.candidates.len(), 6);
    }

    #[test]
    fn store_name_override_keeps_comments() {
        let doc = render_config(Some("Night Kiosk")).unwrap();
        let text = doc.to_string();
        assert!(text.contains("name = \"Night Kiosk\""));
        assert!(text.contains("# Hold a cell this long to start a drag selection."));
        let config: GridConfig = toml::from_str(&text).unwrap();
        assert_eq!(config.store.brand, "青团咖啡");
    }
}
