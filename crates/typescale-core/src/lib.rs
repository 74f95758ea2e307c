//! Typescale Core: from a typography config to CSS-ready values
//!
//! A config declares fonts, a scale and named text variants. This crate turns
//! that declaration into concrete sizes and style declarations:
//!
//! 1. **Validation** - [`validate`] collects every problem with a dotted path
//! 2. **Scale** - [`scale`] computes modular, fixed or fluid sizes
//! 3. **Variants** - [`variant`] resolves each variant against the scale and fonts
//!
//! Computation never fails. Bad input degrades to a documented default and
//! the degradation comes back as a [`Diagnostics`] entry next to the value.
//!
//! ```rust
//! use typescale_core::{calculate_scale, ModularScale, ScaleConfig};
//!
//! let scale = calculate_scale(&ScaleConfig::Modular(ModularScale { base: 16.0, ratio: 1.25 }));
//! assert!(scale.is_clean());
//! assert_eq!(scale.value["xl"].to_css(), "25px");
//! ```
//!
//! Font metrics and fallback math live in `typescale-fontdb`, CSS and token
//! output in `typescale-export`.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod scale;
pub mod strict_mode;
pub mod types;
pub mod validate;
pub mod variant;

pub use config::{load_config, LicenseInfo, LoadingMode, OptimizationConfig, ThemeConfig, TypographyConfig};
pub use context::TypographyContext;
pub use diagnostics::{Computed, Diagnostic, Diagnostics, Severity};
pub use error::{Result, TypescaleError};
pub use scale::{
    calculate_modular_scale, calculate_modular_scale_range, calculate_modular_step,
    calculate_optional_scale, calculate_scale, default_scale, fluid_clamp,
    fluid_size_at_viewport, parse_clamp_expression, ClampExpression, MAX_RANGE_STEPS,
};
pub use types::*;
pub use validate::{validate_config, validate_config_strict, ConfigIssue, ValidationReport};
pub use variant::{font_family_stack, resolve_all_variants, resolve_variant};

#[cfg(test)]
mod proptests;
