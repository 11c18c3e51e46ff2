use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub orange: Color,
    pub selection_bg: Color,
    pub cursor_bg: Color,
    /// Named work item color tokens
    pub work_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut work_colors = HashMap::new();
        work_colors.insert("emerald".into(), Color::Rgb(0x34, 0xD3, 0x99));
        work_colors.insert("orange".into(), Color::Rgb(0xFB, 0x92, 0x3C));
        work_colors.insert("blue".into(), Color::Rgb(0x60, 0xA5, 0xFA));
        work_colors.insert("sky".into(), Color::Rgb(0x38, 0xBD, 0xF8));
        work_colors.insert("yellow".into(), Color::Rgb(0xFA, 0xCC, 0x15));
        work_colors.insert("purple".into(), Color::Rgb(0xC0, 0x84, 0xFC));
        work_colors.insert("gray".into(), Color::Rgb(0x9C, 0xA3, 0xAF));
        work_colors.insert("slate".into(), Color::Rgb(0x94, 0xA3, 0xB8));
        work_colors.insert("red".into(), Color::Rgb(0xF8, 0x71, 0x71));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x19, 0xC1, 0xAD),
            orange: Color::Rgb(0xF9, 0x73, 0x16),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            cursor_bg: Color::Rgb(0x5A, 0x1E, 0x52),
            work_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "orange" => theme.orange = color,
                    "selection_bg" => theme.selection_bg = color,
                    "cursor_bg" => theme.cursor_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Color for a work item token: a named token, a hex value, or dim.
    pub fn work_color(&self, token: &str) -> Color {
        self.work_colors
            .get(token)
            .copied()
            .or_else(|| parse_hex_color(token))
            .unwrap_or(self.dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_work_color_lookup() {
        let theme = Theme::default();
        assert_eq!(theme.work_color("emerald"), Color::Rgb(0x34, 0xD3, 0x99));
        assert_eq!(theme.work_color("#112233"), Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.work_color("chartreuse"), theme.dim);
        assert_eq!(theme.work_color(""), theme.dim);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("orange".into(), "not-a-color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Invalid value leaves the default
        assert_eq!(theme.orange, Color::Rgb(0xF9, 0x73, 0x16));
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
    }
}
