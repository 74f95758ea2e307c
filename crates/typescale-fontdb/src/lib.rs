//! Font metrics and fallback matching for Typescale
//!
//! Web fonts arrive late. Until they do, the browser draws text with a local
//! fallback font, and when the swap happens every line can shift. This crate
//! picks a fallback whose proportions are close and computes the
//! `@font-face` override descriptors that make it occupy the same box.
//!
//! No font files are parsed. Metrics for ten common system fonts are built
//! in; any other font gets a synthetic average (see
//! [`create_default_metrics`]).
//!
//! ```rust
//! use typescale_core::FontMetrics;
//! use typescale_fontdb::{calculate_fallback_adjustments, find_best_matching_fallback};
//!
//! let custom = FontMetrics::new("Brand Sans", 950, -250, 0, 1000).with_x_height(520);
//! let fallback = find_best_matching_fallback(&custom);
//! let adjustments = calculate_fallback_adjustments(&custom, fallback);
//! assert!(adjustments.size_adjust.ends_with('%'));
//! ```

pub mod fallback;
pub mod metrics;

pub use fallback::{
    calculate_fallback_adjustments, estimate_cls_improvement, resolve_fallback,
    validate_adjustments, ClsEstimate, MetricsSource, ResolvedFallback,
};
pub use metrics::{
    create_default_metrics, find_best_matching_fallback, get_metrics, metrics_or_default,
    normalize_metrics, system_font_names, system_fonts,
};

#[cfg(test)]
mod proptests;
