//! Display colors for menu options

/// Palette cycled through when a menu option is created without a color
pub const MENU_PALETTE: &[&str] = &[
    "#f59e0b", "#ef4444", "#3b82f6", "#22c55e", "#10b981", "#a855f7", "#ec4899", "#14b8a6",
    "#f97316", "#6366f1",
];

/// Palette color for the `index`-th option, wrapping around
pub fn palette_color(index: usize) -> &'static str {
    MENU_PALETTE[index % MENU_PALETTE.len()]
}

/// `#rgb` or `#rrggbb`, case-insensitive
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Normalize to lowercase `#rrggbb`, expanding the short form.
///
/// Returns `None` when the input is not a hex color.
pub fn normalize_hex_color(value: &str) -> Option<String> {
    if !is_hex_color(value) {
        return None;
    }
    let hex = value[1..].to_ascii_lowercase();
    if hex.len() == 3 {
        let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
        return Some(format!("#{expanded}"));
    }
    Some(format!("#{hex}"))
}
