//! A config snapshot with its derived values computed on demand

use std::path::Path;
use std::sync::OnceLock;

use crate::config::{load_config, TypographyConfig};
use crate::diagnostics::{Computed, Diagnostics};
use crate::error::{Result, TypescaleError};
use crate::scale::calculate_optional_scale;
use crate::strict_mode::is_strict_mode;
use crate::types::{ComputedScale, ComputedVariantStyles, ComputedVariants, FontMap};
use crate::validate::{validate_config, ValidationReport};
use crate::variant::resolve_all_variants;

/// Everything derived from one [`TypographyConfig`]
///
/// Pass it explicitly to whatever needs typography values. The scale and
/// variants are computed once, on first access.
#[derive(Debug)]
pub struct TypographyContext {
    config: TypographyConfig,
    report: ValidationReport,
    scale: OnceLock<Computed<ComputedScale>>,
    variants: OnceLock<Computed<ComputedVariants>>,
}

impl TypographyContext {
    /// Validate and wrap a config, honoring the global strict switch
    pub fn new(config: TypographyConfig) -> Result<Self> {
        Self::with_validation(config, is_strict_mode())
    }

    /// Validate and wrap a config; `strict` turns validation errors into `Err`
    pub fn with_validation(config: TypographyConfig, strict: bool) -> Result<Self> {
        let report = validate_config(&config);
        if !report.is_valid() {
            if strict {
                return Err(TypescaleError::InvalidConfig(report));
            }
            for issue in &report.errors {
                log::warn!("{issue}");
            }
        }

        Ok(Self {
            config,
            report,
            scale: OnceLock::new(),
            variants: OnceLock::new(),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(load_config(path)?)
    }

    /// A fresh context for the named theme
    pub fn with_theme(&self, name: &str) -> Result<Self> {
        Self::new(self.config.with_theme(name)?)
    }

    pub fn config(&self) -> &TypographyConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FontMap {
        &self.config.fonts
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    fn computed_scale(&self) -> &Computed<ComputedScale> {
        self.scale
            .get_or_init(|| calculate_optional_scale(self.config.scale.as_ref()))
    }

    fn computed_variants(&self) -> &Computed<ComputedVariants> {
        self.variants.get_or_init(|| {
            resolve_all_variants(
                &self.config.variants,
                &self.computed_scale().value,
                &self.config.fonts,
            )
        })
    }

    pub fn scale(&self) -> &ComputedScale {
        &self.computed_scale().value
    }

    pub fn variants(&self) -> &ComputedVariants {
        &self.computed_variants().value
    }

    pub fn variant(&self, name: &str) -> Result<&ComputedVariantStyles> {
        self.variants()
            .get(name)
            .ok_or_else(|| TypescaleError::UnknownVariant(name.to_string()))
    }

    /// Degradations recorded while computing the scale and variants
    pub fn diagnostics(&self) -> Diagnostics {
        let mut all = self.computed_scale().diagnostics.clone();
        all.extend(self.computed_variants().diagnostics.clone());
        all
    }
}
