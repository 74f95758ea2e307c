//! Number formatting shared by every CSS-emitting path

/// Root font size used for every px <-> rem conversion
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format with at most `decimals` places, trimming trailing zeros.
///
/// `1.5000` becomes `1.5`, `16.0` becomes `16`, `-0` becomes `0`.
pub fn format_number(value: f64, decimals: u32) -> String {
    let mut text = format!("{:.*}", decimals as usize, round_to(value, decimals));
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// `16.0` -> `16px`
pub fn format_px(value: f64) -> String {
    format!("{}px", format_number(value, 4))
}

/// Fixed two-place percentage, e.g. `96.90%`
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Parse `"96.90%"` back into `96.9`
pub fn parse_percent(text: &str) -> Option<f64> {
    text.trim().strip_suffix('%')?.trim().parse().ok()
}

/// A single-quoted CSS string with `\\`, `'` and line breaks escaped
pub fn css_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\a "),
            '\r' => {},
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}
