//! Override descriptors that make a fallback font occupy the web font's box
//!
//! Applying `ascent-override`, `descent-override`, `line-gap-override` and
//! `size-adjust` to a local fallback face keeps text from reflowing when the
//! web font arrives.

use serde::Serialize;

use typescale_core::format::{format_percent, parse_percent};
use typescale_core::{AdjustmentOverrides, FallbackAdjustments, FontDefinition, FontMetrics};

use crate::metrics::{
    create_default_metrics, find_best_matching_fallback, get_metrics, metrics_or_default,
    normalize_metrics, x_height_or_default, COMPARISON_UNITS_PER_EM,
};

const ASCENT_RANGE: (f64, f64) = (50.0, 150.0);
const DESCENT_RANGE: (f64, f64) = (5.0, 50.0);
const SIZE_ADJUST_RANGE: (f64, f64) = (70.0, 130.0);

fn percent_of_em(value: i32) -> f64 {
    f64::from(value) / f64::from(COMPARISON_UNITS_PER_EM) * 100.0
}

/// Descriptors for `fallback_name` standing in for a font with `custom` metrics.
///
/// Both sides are compared at 1000 units/em. An unknown fallback name uses
/// synthetic metrics.
pub fn calculate_fallback_adjustments(
    custom: &FontMetrics,
    fallback_name: &str,
) -> FallbackAdjustments {
    let custom = normalize_metrics(custom, COMPARISON_UNITS_PER_EM);
    let fallback = normalize_metrics(&metrics_or_default(fallback_name), COMPARISON_UNITS_PER_EM);

    let size_adjust =
        f64::from(x_height_or_default(&custom)) / f64::from(x_height_or_default(&fallback)) * 100.0;

    let adjustments = FallbackAdjustments {
        ascent_override: format_percent(percent_of_em(custom.ascent.abs())),
        descent_override: format_percent(percent_of_em(custom.descent.abs())),
        line_gap_override: format_percent(percent_of_em(custom.line_gap.max(0))),
        size_adjust: format_percent(size_adjust),
    };
    log::debug!(
        "Fallback adjustments for '{}' over '{fallback_name}': {adjustments:?}",
        custom.family_name
    );
    adjustments
}

/// Heuristic layout-shift estimate, before and after applying adjustments.
///
/// Derived only from the line-height difference; it is not a measured CLS score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClsEstimate {
    pub before: f64,
    pub after: f64,
}

impl ClsEstimate {
    /// Relative reduction, 0 when there was nothing to reduce
    pub fn improvement_percent(&self) -> f64 {
        if self.before > 0.0 {
            (self.before - self.after) / self.before * 100.0
        } else {
            0.0
        }
    }
}

pub fn estimate_cls_improvement(metrics: &FontMetrics, fallback_name: &str) -> ClsEstimate {
    let fallback = metrics_or_default(fallback_name);
    let delta = (metrics.line_height_ratio() - fallback.line_height_ratio()).abs();
    ClsEstimate {
        before: (delta * 0.5).min(0.25),
        after: (delta * 0.05).min(0.05),
    }
}

fn check_range(
    label: &str,
    value: &str,
    (low, high): (f64, f64),
    warnings: &mut Vec<String>,
) {
    match parse_percent(value) {
        Some(percent) if percent < low || percent > high => warnings.push(format!(
            "{label} {value} is outside the usual {low}%-{high}% range"
        )),
        Some(_) => {},
        None => warnings.push(format!("{label} '{value}' is not a percentage")),
    }
}

/// Flag values that are probably a misconfiguration. Never fails.
pub fn validate_adjustments(adjustments: &FallbackAdjustments) -> Vec<String> {
    let mut warnings = Vec::new();
    check_range(
        "ascent-override",
        &adjustments.ascent_override,
        ASCENT_RANGE,
        &mut warnings,
    );
    check_range(
        "descent-override",
        &adjustments.descent_override,
        DESCENT_RANGE,
        &mut warnings,
    );
    check_range(
        "size-adjust",
        &adjustments.size_adjust,
        SIZE_ADJUST_RANGE,
        &mut warnings,
    );
    for warning in &warnings {
        log::warn!("{warning}");
    }
    warnings
}

/// Where a font's metrics came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsSource {
    Table,
    Synthetic,
    /// Measured by the caller, e.g. read from the font file
    Provided,
}

/// Everything needed to emit a font's fallback `@font-face`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFallback {
    /// `"<Name> Fallback"`
    pub family: String,
    /// Local system font the face points at
    pub local_font: String,
    pub metrics_source: MetricsSource,
    /// Only the descriptors that should be emitted
    pub descriptors: AdjustmentOverrides,
}

/// Pick the fallback font and compute its descriptors.
///
/// The configured font wins; otherwise the closest system font is used.
/// With `auto` every descriptor is computed, then manual overrides replace
/// individual fields. Without `auto` only the overrides are emitted.
pub fn resolve_fallback(font: &FontDefinition) -> ResolvedFallback {
    let config = font.fallback.clone().unwrap_or_default();

    let (metrics, metrics_source) = match get_metrics(&font.name) {
        Some(metrics) => (metrics, MetricsSource::Table),
        None => (create_default_metrics(&font.name), MetricsSource::Synthetic),
    };

    let local_font = config
        .font
        .clone()
        .unwrap_or_else(|| find_best_matching_fallback(&metrics).to_string());

    let mut descriptors = if config.auto {
        let computed = calculate_fallback_adjustments(&metrics, &local_font);
        AdjustmentOverrides {
            ascent_override: Some(computed.ascent_override),
            descent_override: Some(computed.descent_override),
            line_gap_override: Some(computed.line_gap_override),
            size_adjust: Some(computed.size_adjust),
        }
    } else {
        AdjustmentOverrides::default()
    };

    if let Some(overrides) = &config.overrides {
        let fields = [
            (&mut descriptors.ascent_override, &overrides.ascent_override),
            (&mut descriptors.descent_override, &overrides.descent_override),
            (&mut descriptors.line_gap_override, &overrides.line_gap_override),
            (&mut descriptors.size_adjust, &overrides.size_adjust),
        ];
        for (slot, value) in fields {
            if value.is_some() {
                *slot = value.clone();
            }
        }
    }

    ResolvedFallback {
        family: font.fallback_family(),
        local_font,
        metrics_source,
        descriptors,
    }
}
