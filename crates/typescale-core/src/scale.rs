//! Scale engine: turns a [`ScaleConfig`] into named size tokens
//!
//! Four algorithms, one contract. Every path degrades instead of failing:
//! bad numbers fall back to defaults, bad entries are dropped, and each
//! degradation lands in the returned [`Diagnostics`].
//!
//! | type      | output                                   |
//! |-----------|------------------------------------------|
//! | `modular` | `base * ratio^n` px, rounded to 2 places |
//! | `fixed`   | the configured px values, positive only  |
//! | `fluid`   | `clamp(min, preferred, max)` strings     |
//! | `custom`  | whatever was configured                  |

use indexmap::IndexMap;

use crate::diagnostics::{Computed, Diagnostics};
use crate::format::{format_number, round_to, ROOT_FONT_SIZE_PX};
use crate::types::{ComputedScale, FluidScale, ModularScale, ScaleConfig, ScaleValue};

/// The ten named steps, smallest first
pub const STEP_NAMES: [&str; 10] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

/// Modular exponent per step; `base` is the zero point
const MODULAR_EXPONENTS: [(&str, i32); 10] = [
    ("xs", -2),
    ("sm", -1),
    ("base", 0),
    ("lg", 1),
    ("xl", 2),
    ("2xl", 3),
    ("3xl", 4),
    ("4xl", 5),
    ("5xl", 6),
    ("6xl", 7),
];

/// Nominal size of each fluid step relative to `base`
const FLUID_MULTIPLIERS: [(&str, f64); 10] = [
    ("xs", 0.75),
    ("sm", 0.875),
    ("base", 1.0),
    ("lg", 1.125),
    ("xl", 1.25),
    ("2xl", 1.5),
    ("3xl", 1.875),
    ("4xl", 2.25),
    ("5xl", 3.0),
    ("6xl", 3.75),
];

/// Used whenever the scale type is missing or unrecognised
const DEFAULT_FIXED_SCALE: [(&str, f64); 10] = [
    ("xs", 12.0),
    ("sm", 14.0),
    ("base", 16.0),
    ("lg", 18.0),
    ("xl", 20.0),
    ("2xl", 24.0),
    ("3xl", 30.0),
    ("4xl", 36.0),
    ("5xl", 48.0),
    ("6xl", 60.0),
];

pub const DEFAULT_BASE: f64 = 16.0;
pub const DEFAULT_RATIO: f64 = 1.25;
pub const DEFAULT_MIN_VIEWPORT: f64 = 320.0;
pub const DEFAULT_MAX_VIEWPORT: f64 = 1280.0;

/// Well-known modular ratios, accepted wherever a ratio is typed by hand
pub const NAMED_RATIOS: [(&str, f64); 9] = [
    ("minor-second", 1.067),
    ("major-second", 1.125),
    ("minor-third", 1.2),
    ("major-third", 1.25),
    ("perfect-fourth", 1.333),
    ("augmented-fourth", 1.414),
    ("perfect-fifth", 1.5),
    ("golden-ratio", 1.618),
    ("octave", 2.0),
];

/// Look up a named ratio (`major-third` -> 1.25)
pub fn named_ratio(name: &str) -> Option<f64> {
    let name = name.trim().to_ascii_lowercase();
    NAMED_RATIOS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, ratio)| *ratio)
}

/// The fixed scale used when nothing better is available
pub fn default_scale() -> ComputedScale {
    DEFAULT_FIXED_SCALE
        .iter()
        .map(|(name, px)| (name.to_string(), ScaleValue::Px(*px)))
        .collect()
}

/// Compute a scale from its configuration. Never fails.
pub fn calculate_scale(config: &ScaleConfig) -> Computed<ComputedScale> {
    log::debug!("Calculating {} scale", config.kind());
    match config {
        ScaleConfig::Modular(modular) => calculate_modular(modular),
        ScaleConfig::Fixed(fixed) => calculate_fixed(&fixed.values),
        ScaleConfig::Fluid(fluid) => calculate_fluid(fluid),
        ScaleConfig::Custom(custom) => calculate_custom(&custom.values),
        ScaleConfig::Unknown => {
            let mut diagnostics = Diagnostics::new();
            diagnostics.warn(
                "scale.type",
                "Unknown or missing scale type, using the default fixed scale",
            );
            Computed::new(default_scale(), diagnostics)
        },
    }
}

/// Like [`calculate_scale`], but a missing config also degrades to the default
pub fn calculate_optional_scale(config: Option<&ScaleConfig>) -> Computed<ComputedScale> {
    match config {
        Some(config) => calculate_scale(config),
        None => {
            let mut diagnostics = Diagnostics::new();
            diagnostics.warn("scale", "No scale configured, using the default fixed scale");
            Computed::new(default_scale(), diagnostics)
        },
    }
}

/// Step names a config will produce, without computing values
pub fn scale_keys(config: Option<&ScaleConfig>) -> Vec<String> {
    match config {
        Some(ScaleConfig::Fixed(fixed)) => fixed.values.keys().cloned().collect(),
        Some(ScaleConfig::Custom(custom)) => custom.values.keys().cloned().collect(),
        _ => STEP_NAMES.iter().map(|name| name.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Modular
// ---------------------------------------------------------------------------

/// `base * ratio^step`, unrounded
pub fn calculate_modular_step(base: f64, ratio: f64, step: i32) -> f64 {
    base * ratio.powi(step)
}

/// The ten named steps, each rounded to 2 decimal places
pub fn calculate_modular_scale(base: f64, ratio: f64) -> ComputedScale {
    MODULAR_EXPONENTS
        .iter()
        .map(|(name, exponent)| {
            let px = round_to(calculate_modular_step(base, ratio, *exponent), 2);
            (name.to_string(), ScaleValue::Px(px))
        })
        .collect()
}

/// Most steps a range may reach on either side of `base`
pub const MAX_RANGE_STEPS: u32 = 64;

/// An arbitrary contiguous run of steps around `base`, ascending.
///
/// Covers exponents `-steps_down..=steps_up`, so the result has
/// `steps_down + steps_up + 1` entries and always contains `base`.
/// Step counts above [`MAX_RANGE_STEPS`] are capped with a warning.
pub fn calculate_modular_scale_range(
    base: f64,
    ratio: f64,
    steps_up: u32,
    steps_down: u32,
) -> Vec<f64> {
    let cap = |steps: u32, side: &str| {
        if steps > MAX_RANGE_STEPS {
            log::warn!("{steps} steps {side} base requested; capped at {MAX_RANGE_STEPS}");
        }
        i32::try_from(steps.min(MAX_RANGE_STEPS)).unwrap_or(0)
    };
    let low = -cap(steps_down, "below");
    let high = cap(steps_up, "above");
    let mut values: Vec<f64> = (low..=high)
        .map(|step| round_to(calculate_modular_step(base, ratio, step), 2))
        .collect();
    values.sort_by(f64::total_cmp);
    values
}

fn calculate_modular(config: &ModularScale) -> Computed<ComputedScale> {
    let mut diagnostics = Diagnostics::new();

    let base = if config.base.is_finite() && config.base > 0.0 {
        config.base
    } else {
        diagnostics.warn(
            "scale.base",
            format!("Base must be positive, got {}; using {DEFAULT_BASE}", config.base),
        );
        DEFAULT_BASE
    };

    let ratio = if config.ratio.is_finite() && config.ratio > 0.0 {
        config.ratio
    } else {
        diagnostics.warn(
            "scale.ratio",
            format!("Ratio must be positive, got {}; using {DEFAULT_RATIO}", config.ratio),
        );
        DEFAULT_RATIO
    };

    Computed::new(calculate_modular_scale(base, ratio), diagnostics)
}

// ---------------------------------------------------------------------------
// Fixed
// ---------------------------------------------------------------------------

fn calculate_fixed(values: &IndexMap<String, ScaleValue>) -> Computed<ComputedScale> {
    let mut diagnostics = Diagnostics::new();
    let mut scale = ComputedScale::with_capacity(values.len());

    for (key, value) in values {
        match value {
            ScaleValue::Px(px) if px.is_finite() && *px > 0.0 => {
                scale.insert(key.clone(), ScaleValue::Px(*px));
            },
            ScaleValue::Px(px) => diagnostics.warn(
                format!("scale.values.{key}"),
                format!("Size must be positive, got {px}; dropped"),
            ),
            ScaleValue::Css(text) => diagnostics.warn(
                format!("scale.values.{key}"),
                format!("Fixed scale values must be numbers, got '{text}'; dropped"),
            ),
            ScaleValue::Invalid(value) => diagnostics.warn(
                format!("scale.values.{key}"),
                format!("Fixed scale values must be numbers, got {value}; dropped"),
            ),
        }
    }

    Computed::new(scale, diagnostics)
}

// Custom values are not checked, but a non-length cannot be rendered at all.
fn calculate_custom(values: &IndexMap<String, ScaleValue>) -> Computed<ComputedScale> {
    let mut diagnostics = Diagnostics::new();
    let mut scale = ComputedScale::with_capacity(values.len());

    for (key, value) in values {
        if let ScaleValue::Invalid(value) = value {
            diagnostics.warn(
                format!("scale.values.{key}"),
                format!("Expected a number or CSS length, got {value}; dropped"),
            );
        } else {
            scale.insert(key.clone(), value.clone());
        }
    }

    Computed::new(scale, diagnostics)
}

// ---------------------------------------------------------------------------
// Fluid
// ---------------------------------------------------------------------------

fn positive_or(
    value: f64,
    fallback: f64,
    path: &str,
    label: &str,
    diagnostics: &mut Diagnostics,
) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        diagnostics.warn(
            path,
            format!("{label} must be positive, got {value}; using {fallback}"),
        );
        fallback
    }
}

fn calculate_fluid(config: &FluidScale) -> Computed<ComputedScale> {
    let mut diagnostics = Diagnostics::new();

    let base = positive_or(config.base, DEFAULT_BASE, "scale.base", "Base", &mut diagnostics);
    let mut min_scale = positive_or(
        config.min_scale,
        1.0,
        "scale.minScale",
        "minScale",
        &mut diagnostics,
    );
    let mut max_scale = positive_or(
        config.max_scale,
        1.0,
        "scale.maxScale",
        "maxScale",
        &mut diagnostics,
    );
    if min_scale > max_scale {
        diagnostics.warn(
            "scale.minScale",
            format!("minScale {min_scale} exceeds maxScale {max_scale}; swapped"),
        );
        std::mem::swap(&mut min_scale, &mut max_scale);
    }

    let viewports_valid = config.min_viewport.is_finite()
        && config.max_viewport.is_finite()
        && config.min_viewport > 0.0
        && config.max_viewport > 0.0
        && config.min_viewport < config.max_viewport;
    let (min_viewport, max_viewport) = if viewports_valid {
        (config.min_viewport, config.max_viewport)
    } else {
        diagnostics.warn(
            "scale.minViewport",
            format!(
                "Viewport range {}..{} is invalid; using {DEFAULT_MIN_VIEWPORT}..{DEFAULT_MAX_VIEWPORT}",
                config.min_viewport, config.max_viewport
            ),
        );
        (DEFAULT_MIN_VIEWPORT, DEFAULT_MAX_VIEWPORT)
    };

    let scale = FLUID_MULTIPLIERS
        .iter()
        .map(|(name, multiplier)| {
            let nominal = base * multiplier;
            let expression = fluid_clamp(
                nominal * min_scale,
                nominal * max_scale,
                min_viewport,
                max_viewport,
            );
            (name.to_string(), ScaleValue::Css(expression))
        })
        .collect();

    Computed::new(scale, diagnostics)
}

/// Nominal `(min_px, max_px)` per fluid step, for previews and token export
pub fn fluid_bounds(config: &FluidScale) -> IndexMap<String, (f64, f64)> {
    FLUID_MULTIPLIERS
        .iter()
        .map(|(name, multiplier)| {
            let nominal = config.base * multiplier;
            (
                name.to_string(),
                (nominal * config.min_scale, nominal * config.max_scale),
            )
        })
        .collect()
}

/// Build `clamp(min, preferred, max)` interpolating linearly between viewports.
///
/// Sizes and viewports are in px; the expression uses `rem` (16px) and `vw`.
/// A negative intercept is written as `Xvw - Yrem`.
pub fn fluid_clamp(min_px: f64, max_px: f64, min_viewport_px: f64, max_viewport_px: f64) -> String {
    let (min_px, max_px) = if min_px <= max_px {
        (min_px, max_px)
    } else {
        (max_px, min_px)
    };

    let min_rem = min_px / ROOT_FONT_SIZE_PX;
    let max_rem = max_px / ROOT_FONT_SIZE_PX;
    let min_vw_rem = min_viewport_px / ROOT_FONT_SIZE_PX;
    let max_vw_rem = max_viewport_px / ROOT_FONT_SIZE_PX;

    let span = max_vw_rem - min_vw_rem;
    let slope = if span.abs() > f64::EPSILON {
        (max_rem - min_rem) / span
    } else {
        0.0
    };
    let intercept = min_rem - slope * min_vw_rem;
    let slope_vw = slope * 100.0;

    let preferred = if intercept < 0.0 {
        format!(
            "{}vw - {}rem",
            format_number(slope_vw, 4),
            format_number(-intercept, 4)
        )
    } else {
        format!(
            "{}rem + {}vw",
            format_number(intercept, 4),
            format_number(slope_vw, 4)
        )
    };

    format!(
        "clamp({}rem, {}, {}rem)",
        format_number(min_rem, 4),
        preferred,
        format_number(max_rem, 4)
    )
}

/// The pieces of a `clamp(min, intercept + slope, max)` expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampExpression {
    pub min_px: f64,
    pub max_px: f64,
    /// Constant term of the preferred value, in rem
    pub intercept_rem: f64,
    /// Viewport term of the preferred value, in vw
    pub slope_vw: f64,
}

impl ClampExpression {
    /// Unclamped preferred value at a viewport width
    pub fn preferred_px_at(&self, viewport_px: f64) -> f64 {
        self.intercept_rem * ROOT_FONT_SIZE_PX + self.slope_vw / 100.0 * viewport_px
    }

    /// What the browser would compute at a viewport width
    pub fn resolve_px_at(&self, viewport_px: f64) -> f64 {
        self.preferred_px_at(viewport_px)
            .clamp(self.min_px, self.max_px.max(self.min_px))
    }
}

/// Parse a length in `rem` or `px` into px
fn parse_length_px(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some(number) = text.strip_suffix("rem") {
        number.trim().parse::<f64>().ok().map(|rem| rem * ROOT_FONT_SIZE_PX)
    } else if let Some(number) = text.strip_suffix("px") {
        number.trim().parse::<f64>().ok()
    } else {
        None
    }
}

/// Parse `Arem + Bvw`, `Bvw - Arem`, or a single term
fn parse_preferred(text: &str) -> Option<(f64, f64)> {
    let mut intercept_rem = 0.0;
    let mut slope_vw = 0.0;
    let mut sign = 1.0;
    let mut expect_term = true;

    for token in text.split_whitespace() {
        if expect_term {
            if let Some(number) = token.strip_suffix("rem") {
                intercept_rem += sign * number.parse::<f64>().ok()?;
            } else if let Some(number) = token.strip_suffix("vw") {
                slope_vw += sign * number.parse::<f64>().ok()?;
            } else if let Some(number) = token.strip_suffix("px") {
                intercept_rem += sign * number.parse::<f64>().ok()? / ROOT_FONT_SIZE_PX;
            } else {
                return None;
            }
            expect_term = false;
        } else {
            sign = match token {
                "+" => 1.0,
                "-" => -1.0,
                _ => return None,
            };
            expect_term = true;
        }
    }

    if expect_term {
        return None;
    }
    Some((intercept_rem, slope_vw))
}

/// Recover min/max (px) and the preferred terms from a `clamp()` string
pub fn parse_clamp_expression(expression: &str) -> Option<ClampExpression> {
    let inner = expression
        .trim()
        .strip_prefix("clamp(")?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let [min, preferred, max] = parts.as_slice() else {
        return None;
    };

    let (intercept_rem, slope_vw) = parse_preferred(preferred)?;
    Some(ClampExpression {
        min_px: parse_length_px(min)?,
        max_px: parse_length_px(max)?,
        intercept_rem,
        slope_vw,
    })
}

/// Size in px at a viewport width, clamped outside `[min_viewport, max_viewport]`
pub fn fluid_size_at_viewport(
    min_px: f64,
    max_px: f64,
    min_viewport_px: f64,
    max_viewport_px: f64,
    viewport_px: f64,
) -> f64 {
    if viewport_px <= min_viewport_px {
        return min_px;
    }
    if viewport_px >= max_viewport_px {
        return max_px;
    }
    let progress = (viewport_px - min_viewport_px) / (max_viewport_px - min_viewport_px);
    min_px + (max_px - min_px) * progress
}

/// Every fluid step resolved to px at one viewport width
pub fn preview_fluid_scale(config: &FluidScale, viewport_px: f64) -> IndexMap<String, f64> {
    fluid_bounds(config)
        .into_iter()
        .map(|(name, (min_px, max_px))| {
            let px = fluid_size_at_viewport(
                min_px,
                max_px,
                config.min_viewport,
                config.max_viewport,
                viewport_px,
            );
            (name, round_to(px, 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomScale, FixedScale};

    fn px(scale: &ComputedScale, key: &str) -> f64 {
        scale[key].as_px().unwrap()
    }

    #[test]
    fn test_modular_example_values() {
        let scale = calculate_modular_scale(16.0, 1.25);
        assert_eq!(px(&scale, "base"), 16.0);
        assert_eq!(px(&scale, "lg"), 20.0);
        assert_eq!(px(&scale, "xl"), 25.0);
        assert_eq!(px(&scale, "sm"), 12.8);
        assert_eq!(px(&scale, "xs"), 10.24);
        assert_eq!(px(&scale, "5xl"), 61.04);
    }

    #[test]
    fn test_modular_keys_in_step_order() {
        let scale = calculate_modular_scale(16.0, 1.2);
        let keys: Vec<&str> = scale.keys().map(String::as_str).collect();
        assert_eq!(keys, STEP_NAMES);
    }

    #[test]
    fn test_modular_step_zero_is_base() {
        assert_eq!(calculate_modular_step(17.3, 1.618, 0), 17.3);
    }

    #[test]
    fn test_modular_bad_ratio_degrades() {
        let computed = calculate_scale(&ScaleConfig::Modular(ModularScale {
            base: 16.0,
            ratio: -1.0,
        }));
        assert!(computed.diagnostics.mentions("scale.ratio"));
        assert_eq!(px(&computed.value, "lg"), 20.0);
    }

    #[test]
    fn test_modular_range() {
        let values = calculate_modular_scale_range(16.0, 1.5, 2, 1);
        assert_eq!(values, vec![10.67, 16.0, 24.0, 36.0]);

        let only_base = calculate_modular_scale_range(16.0, 1.5, 0, 0);
        assert_eq!(only_base, vec![16.0]);
    }

    #[test]
    fn test_modular_range_is_capped() {
        let values = calculate_modular_scale_range(16.0, 1.01, u32::MAX, 3_000_000_000);
        assert_eq!(values.len(), (2 * MAX_RANGE_STEPS + 1) as usize);
        assert!(values.contains(&16.0));
    }

    #[test]
    fn test_modular_range_sorted_for_shrinking_ratio() {
        let values = calculate_modular_scale_range(16.0, 0.5, 1, 1);
        assert_eq!(values, vec![8.0, 16.0, 32.0]);
    }

    #[test]
    fn test_fixed_round_trips_positive_values() {
        let mut values = IndexMap::new();
        values.insert("xs".to_string(), ScaleValue::Px(12.0));
        values.insert("base".to_string(), ScaleValue::Px(16.0));

        let computed = calculate_scale(&ScaleConfig::Fixed(FixedScale {
            values: values.clone(),
        }));
        assert!(computed.is_clean());
        assert_eq!(computed.value, values);
    }

    #[test]
    fn test_fixed_drops_bad_entries() {
        let mut values = IndexMap::new();
        values.insert("xs".to_string(), ScaleValue::Px(0.0));
        values.insert("sm".to_string(), ScaleValue::Px(-4.0));
        values.insert("md".to_string(), ScaleValue::Css("1rem".into()));
        values.insert("base".to_string(), ScaleValue::Px(16.0));

        let computed = calculate_scale(&ScaleConfig::Fixed(FixedScale { values }));
        assert_eq!(computed.value.len(), 1);
        assert_eq!(px(&computed.value, "base"), 16.0);
        assert_eq!(computed.diagnostics.warning_count(), 3);
        assert!(computed.diagnostics.mentions("scale.values.xs"));
        assert!(computed.diagnostics.mentions("scale.values.md"));
    }

    #[test]
    fn test_fixed_drops_non_numeric_json_entries() {
        let mut values = IndexMap::new();
        values.insert("xs".to_string(), ScaleValue::Px(12.0));
        values.insert("sm".to_string(), ScaleValue::Invalid(serde_json::Value::Null));
        values.insert("md".to_string(), ScaleValue::Invalid(serde_json::Value::Bool(true)));
        values.insert("base".to_string(), ScaleValue::Px(16.0));

        let computed = calculate_scale(&ScaleConfig::Fixed(FixedScale { values }));
        let keys: Vec<&str> = computed.value.keys().map(String::as_str).collect();
        assert_eq!(keys, ["xs", "base"]);
        assert_eq!(computed.diagnostics.warning_count(), 2);
        assert!(computed.diagnostics.mentions("scale.values.sm"));
    }

    #[test]
    fn test_custom_drops_only_non_lengths() {
        let mut values = IndexMap::new();
        values.insert("hero".to_string(), ScaleValue::Css("8rem".into()));
        values.insert("odd".to_string(), ScaleValue::Invalid(serde_json::json!({ "px": 4 })));
        let computed = calculate_scale(&ScaleConfig::Custom(CustomScale { values }));
        assert_eq!(computed.value.len(), 1);
        assert!(computed.diagnostics.mentions("scale.values.odd"));
    }

    #[test]
    fn test_custom_passes_through() {
        let mut values = IndexMap::new();
        values.insert("hero".to_string(), ScaleValue::Css("min(10vw, 8rem)".into()));
        values.insert("tiny".to_string(), ScaleValue::Px(-1.0));
        let computed = calculate_scale(&ScaleConfig::Custom(CustomScale {
            values: values.clone(),
        }));
        assert!(computed.is_clean());
        assert_eq!(computed.value, values);
    }

    #[test]
    fn test_unknown_type_uses_default() {
        let computed = calculate_scale(&ScaleConfig::Unknown);
        assert_eq!(computed.value, default_scale());
        assert!(computed.diagnostics.mentions("scale.type"));
    }

    #[test]
    fn test_missing_scale_uses_default() {
        let computed = calculate_optional_scale(None);
        assert_eq!(px(&computed.value, "base"), 16.0);
        assert_eq!(computed.diagnostics.warning_count(), 1);
    }

    #[test]
    fn test_fluid_clamp_positive_intercept() {
        // 16px @ 320px -> 20px @ 1280px
        let expression = fluid_clamp(16.0, 20.0, 320.0, 1280.0);
        assert_eq!(expression, "clamp(1rem, 0.9167rem + 0.4167vw, 1.25rem)");
    }

    #[test]
    fn test_fluid_clamp_negative_intercept() {
        // steep growth pushes the intercept below zero
        let expression = fluid_clamp(12.0, 80.0, 400.0, 800.0);
        assert_eq!(expression, "clamp(0.75rem, 17vw - 3.5rem, 5rem)");

        let parsed = parse_clamp_expression(&expression).unwrap();
        assert_eq!(parsed.intercept_rem, -3.5);
        assert_eq!(parsed.slope_vw, 17.0);
    }

    #[test]
    fn test_fluid_scale_produces_clamp_for_every_step() {
        let computed = calculate_scale(&ScaleConfig::Fluid(FluidScale::default()));
        assert!(computed.is_clean());
        assert_eq!(computed.value.len(), STEP_NAMES.len());
        for value in computed.value.values() {
            assert!(value.to_css().starts_with("clamp("));
        }
    }

    #[test]
    fn test_fluid_invalid_viewports_degrade() {
        let computed = calculate_scale(&ScaleConfig::Fluid(FluidScale {
            min_viewport: 1200.0,
            max_viewport: 400.0,
            ..FluidScale::default()
        }));
        assert!(computed.diagnostics.mentions("scale.minViewport"));
        let base = parse_clamp_expression(&computed.value["base"].to_css()).unwrap();
        assert!((base.resolve_px_at(DEFAULT_MIN_VIEWPORT) - 16.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_clamp_round_trip() {
        let expression = fluid_clamp(18.0, 27.0, 375.0, 1440.0);
        let parsed = parse_clamp_expression(&expression).unwrap();
        assert!((parsed.min_px - 18.0).abs() < 1e-9);
        assert!((parsed.max_px - 27.0).abs() < 1e-9);
        assert!((parsed.resolve_px_at(375.0) - 18.0).abs() < 0.01);
        assert!((parsed.resolve_px_at(1440.0) - 27.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_clamp_rejects_garbage() {
        assert_eq!(parse_clamp_expression("16px"), None);
        assert_eq!(parse_clamp_expression("clamp(1rem, 2rem)"), None);
        assert_eq!(parse_clamp_expression("clamp(1rem, 1rem +, 2rem)"), None);
        assert_eq!(parse_clamp_expression("clamp(1em, 1rem, 2rem)"), None);
    }

    #[test]
    fn test_fluid_size_at_viewport() {
        assert_eq!(fluid_size_at_viewport(16.0, 20.0, 320.0, 1280.0, 100.0), 16.0);
        assert_eq!(fluid_size_at_viewport(16.0, 20.0, 320.0, 1280.0, 2000.0), 20.0);
        assert_eq!(fluid_size_at_viewport(16.0, 20.0, 320.0, 1280.0, 800.0), 18.0);
    }

    #[test]
    fn test_preview_fluid_scale() {
        let preview = preview_fluid_scale(&FluidScale::default(), 1280.0);
        assert_eq!(preview["base"], 20.0);
        assert_eq!(preview["xs"], 15.0);
    }

    #[test]
    fn test_named_ratio() {
        assert_eq!(named_ratio("Major-Third"), Some(1.25));
        assert_eq!(named_ratio("golden-ratio"), Some(1.618));
        assert_eq!(named_ratio("unknown"), None);
    }

    #[test]
    fn test_scale_keys() {
        assert_eq!(scale_keys(None).len(), 10);
        let mut values = IndexMap::new();
        values.insert("body".to_string(), ScaleValue::Px(16.0));
        let keys = scale_keys(Some(&ScaleConfig::Fixed(FixedScale { values })));
        assert_eq!(keys, vec!["body".to_string()]);
    }
}
