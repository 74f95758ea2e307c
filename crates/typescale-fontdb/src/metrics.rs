//! Built-in vertical metrics for common system fonts
//!
//! Values come from the fonts' `hhea`/`OS/2` tables. Only these fonts are
//! known; anything else gets [`create_default_metrics`], which is a rough
//! average and not a measurement.

use typescale_core::FontMetrics;

/// Units/em every cross-font comparison is done at
pub const COMPARISON_UNITS_PER_EM: u16 = 1000;

/// x-height assumed when a font does not report one, at 1000 units/em
pub const DEFAULT_X_HEIGHT: i32 = 500;

struct SystemFont {
    name: &'static str,
    units_per_em: u16,
    ascent: i32,
    descent: i32,
    line_gap: i32,
    cap_height: i32,
    x_height: i32,
}

const fn font(
    name: &'static str,
    units_per_em: u16,
    ascent: i32,
    descent: i32,
    line_gap: i32,
    cap_height: i32,
    x_height: i32,
) -> SystemFont {
    SystemFont {
        name,
        units_per_em,
        ascent,
        descent,
        line_gap,
        cap_height,
        x_height,
    }
}

/// Lookup and tie-break order both follow this table
const SYSTEM_FONTS: [SystemFont; 10] = [
    font("Arial", 2048, 1854, -434, 67, 1467, 1062),
    font("Helvetica Neue", 1000, 952, -213, 28, 714, 517),
    font("Helvetica", 2048, 1577, -471, 0, 1469, 1071),
    font("Times New Roman", 2048, 1825, -443, 87, 1356, 916),
    font("Georgia", 2048, 1878, -449, 0, 1419, 986),
    font("Verdana", 2048, 2059, -430, 0, 1489, 1117),
    font("Courier New", 2048, 1705, -615, 0, 1170, 866),
    font("Segoe UI", 2048, 2210, -514, 0, 1434, 1024),
    font("Roboto", 2048, 1900, -500, 0, 1456, 1082),
    font("Tahoma", 2048, 2049, -423, 0, 1490, 1117),
];

impl SystemFont {
    fn to_metrics(&self) -> FontMetrics {
        FontMetrics::new(
            self.name,
            self.ascent,
            self.descent,
            self.line_gap,
            self.units_per_em,
        )
        .with_cap_height(self.cap_height)
        .with_x_height(self.x_height)
    }
}

/// Names of every known system font, in table order
pub fn system_font_names() -> impl Iterator<Item = &'static str> {
    SYSTEM_FONTS.iter().map(|font| font.name)
}

/// Metrics of every known system font, in table order
pub fn system_fonts() -> impl Iterator<Item = FontMetrics> {
    SYSTEM_FONTS.iter().map(SystemFont::to_metrics)
}

/// Find a system font: exact name, then case-insensitive, then substring
/// either way round (case-insensitive)
pub fn get_metrics(name: &str) -> Option<FontMetrics> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let lower = name.to_lowercase();

    let found = SYSTEM_FONTS
        .iter()
        .find(|font| font.name == name)
        .or_else(|| {
            SYSTEM_FONTS
                .iter()
                .find(|font| font.name.to_lowercase() == lower)
        })
        .or_else(|| {
            SYSTEM_FONTS.iter().find(|font| {
                let known = font.name.to_lowercase();
                known.contains(&lower) || lower.contains(&known)
            })
        });

    if let Some(font) = found {
        if font.name != name {
            log::debug!("Matched '{name}' to system font '{}'", font.name);
        }
    }
    found.map(SystemFont::to_metrics)
}

/// Synthetic metrics for a font that is not in the table.
///
/// Ascent 900, descent -200, no line gap, 1000 units/em, cap height 700,
/// x-height 500. This approximates an average sans-serif; adjustments built
/// from it are estimates.
pub fn create_default_metrics(name: &str) -> FontMetrics {
    FontMetrics::new(name, 900, -200, 0, COMPARISON_UNITS_PER_EM)
        .with_cap_height(700)
        .with_x_height(DEFAULT_X_HEIGHT)
}

/// Table metrics, or synthetic ones with a warning
pub fn metrics_or_default(name: &str) -> FontMetrics {
    get_metrics(name).unwrap_or_else(|| {
        log::warn!("No metrics for '{name}'; using synthetic defaults");
        create_default_metrics(name)
    })
}

fn rescale(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor).round() as i32
}

/// Rescale every linear field to `target_units_per_em`, rounding to nearest
pub fn normalize_metrics(metrics: &FontMetrics, target_units_per_em: u16) -> FontMetrics {
    if metrics.units_per_em == target_units_per_em || metrics.units_per_em == 0 {
        return metrics.clone();
    }
    let factor = f64::from(target_units_per_em) / f64::from(metrics.units_per_em);

    FontMetrics {
        ascent: rescale(metrics.ascent, factor),
        descent: rescale(metrics.descent, factor),
        line_gap: rescale(metrics.line_gap, factor),
        units_per_em: target_units_per_em,
        cap_height: metrics.cap_height.map(|v| rescale(v, factor)),
        x_height: metrics.x_height.map(|v| rescale(v, factor)),
        ..metrics.clone()
    }
}

/// x-height of already-normalized metrics, defaulting when missing or unusable
pub(crate) fn x_height_or_default(metrics: &FontMetrics) -> i32 {
    metrics
        .x_height
        .filter(|x| *x > 0)
        .unwrap_or(DEFAULT_X_HEIGHT)
}

fn match_score(target: &FontMetrics, candidate: &FontMetrics) -> i64 {
    let ascent = i64::from(target.ascent - candidate.ascent).abs();
    let descent = i64::from(target.descent - candidate.descent).abs();
    let x_height =
        i64::from(x_height_or_default(target) - x_height_or_default(candidate)).abs();
    ascent + descent + 2 * x_height
}

/// The system font whose proportions are closest.
///
/// Scores `|Δascent| + |Δdescent| + 2·|Δx-height|` at 1000 units/em; the
/// lowest score wins and ties go to the earlier table entry.
pub fn find_best_matching_fallback(metrics: &FontMetrics) -> &'static str {
    let target = normalize_metrics(metrics, COMPARISON_UNITS_PER_EM);

    let mut best = SYSTEM_FONTS[0].name;
    let mut best_score = i64::MAX;
    for font in &SYSTEM_FONTS {
        let candidate = normalize_metrics(&font.to_metrics(), COMPARISON_UNITS_PER_EM);
        let score = match_score(&target, &candidate);
        if score < best_score {
            best = font.name;
            best_score = score;
        }
    }

    log::debug!(
        "Best fallback for '{}': {best} (score {best_score})",
        metrics.family_name
    );
    best
}
