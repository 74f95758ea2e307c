//! The declarative typography configuration and how it is loaded
//!
//! A config file is JSON or TOML, chosen by extension:
//!
//! ```json
//! {
//!   "scale": { "type": "modular", "base": 16, "ratio": 1.25 },
//!   "fonts": {
//!     "heading": { "name": "Inter", "files": { "700": "/fonts/inter-700.woff2" },
//!                  "fallback": { "font": "Arial", "auto": true } }
//!   },
//!   "variants": { "h1": { "fontSize": "5xl", "fontWeight": 700, "fontFamily": "heading" } }
//! }
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypescaleError};
use crate::types::{FontMap, ScaleConfig, VariantMap};

/// When font CSS is injected and fonts are fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingMode {
    /// Everything up front
    #[default]
    Eager,
    /// Per font, on first request
    Lazy,
}

fn default_true() -> bool {
    true
}

/// Delivery knobs that do not change computed values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    /// Emit preload links for fonts marked `preload`
    #[serde(default = "default_true")]
    pub preload_critical: bool,
    #[serde(default)]
    pub loading: LoadingMode,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            preload_critical: true,
            loading: LoadingMode::default(),
        }
    }
}

/// License record for one font key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub commercial_use: bool,
}

/// Named override of the scale and/or some variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleConfig>,
    #[serde(default)]
    pub variants: VariantMap,
}

/// Everything an application declares about its typography
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    #[serde(default)]
    pub fonts: FontMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleConfig>,
    #[serde(default)]
    pub variants: VariantMap,
    #[serde(default)]
    pub optimization: OptimizationConfig,
    #[serde(default)]
    pub licenses: IndexMap<String, LicenseInfo>,
    #[serde(default)]
    pub themes: IndexMap<String, ThemeConfig>,
}

impl TypographyConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// A new config with the named theme applied.
    ///
    /// The theme's scale replaces the base scale; its variants are merged
    /// over the base variants by name.
    pub fn with_theme(&self, name: &str) -> Result<Self> {
        let theme = self
            .themes
            .get(name)
            .ok_or_else(|| TypescaleError::UnknownTheme(name.to_string()))?;

        let mut themed = self.clone();
        if let Some(scale) = &theme.scale {
            themed.scale = Some(scale.clone());
        }
        for (variant, definition) in &theme.variants {
            themed.variants.insert(variant.clone(), definition.clone());
        }
        log::debug!(
            "Applied theme '{name}': {} variant override(s)",
            theme.variants.len()
        );
        Ok(themed)
    }
}

/// Load a config file, picking the parser from the extension
pub fn load_config(path: impl AsRef<Path>) -> Result<TypographyConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let config = match extension.as_deref() {
        Some("json") => TypographyConfig::from_json_str(&text)?,
        Some("toml") => TypographyConfig::from_toml_str(&text)?,
        other => {
            return Err(TypescaleError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ))
        },
    };

    log::debug!(
        "Loaded {}: {} font(s), {} variant(s), {} theme(s)",
        path.display(),
        config.fonts.len(),
        config.variants.len(),
        config.themes.len()
    );
    Ok(config)
}
