use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells (CJK characters take two).
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
/// Never splits a wide character: if it would not fit, it is dropped.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Left-align `s` in exactly `cells` columns (truncating if needed).
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    out.push_str(&" ".repeat(cells.saturating_sub(w)));
    out
}

/// Center `s` in exactly `cells` columns (truncating if needed). Extra space goes right.
pub fn center_in_width(s: &str, cells: usize) -> String {
    let text = truncate_to_width(s, cells);
    let free = cells.saturating_sub(display_width(&text));
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(free - left))
}

/// Display width of a grapheme cluster.
fn grapheme_display_width(g: &str) -> usize {
    UnicodeWidthStr::width(g)
}
