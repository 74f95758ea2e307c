//! The data structures every stage shares
//!
//! Config-facing types serialize with camelCase names: the configuration
//! object is the only external wire format.

use std::fmt;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::{format_number, format_px};

/// Font key -> definition, in declaration order
pub type FontMap = IndexMap<String, FontDefinition>;

/// Variant name -> declarative style, in declaration order
pub type VariantMap = IndexMap<String, VariantDefinition>;

/// Step name -> size; insertion-ordered, looked up by name
pub type ComputedScale = IndexMap<String, ScaleValue>;

/// Variant name -> resolved styles
pub type ComputedVariants = IndexMap<String, ComputedVariantStyles>;

/// Vertical geometry of a typeface, in font design units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    pub family_name: String,
    pub ascent: i32,
    /// Negative below the baseline
    pub descent: i32,
    pub line_gap: i32,
    pub units_per_em: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_glyphs: Option<u32>,
}

impl FontMetrics {
    pub fn new(
        family_name: impl Into<String>,
        ascent: i32,
        descent: i32,
        line_gap: i32,
        units_per_em: u16,
    ) -> Self {
        Self {
            family_name: family_name.into(),
            ascent,
            descent,
            line_gap,
            units_per_em,
            cap_height: None,
            x_height: None,
            weight: None,
            is_italic: None,
            num_glyphs: None,
        }
    }

    pub fn with_cap_height(mut self, cap_height: i32) -> Self {
        self.cap_height = Some(cap_height);
        self
    }

    pub fn with_x_height(mut self, x_height: i32) -> Self {
        self.x_height = Some(x_height);
        self
    }

    /// Default line height as a multiple of the em size
    pub fn line_height_ratio(&self) -> f64 {
        let upem = f64::from(self.units_per_em.max(1));
        f64::from(self.ascent - self.descent + self.line_gap) / upem
    }
}

/// Four CSS `@font-face` override descriptors, as percentage strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackAdjustments {
    pub ascent_override: String,
    pub descent_override: String,
    pub line_gap_override: String,
    pub size_adjust: String,
}

/// A size in the computed scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleValue {
    /// Pixels
    Px(f64),
    /// Any CSS length expression, e.g. a fluid `clamp(...)`
    Css(String),
    /// Anything else found in a config (`null`, booleans, lists, tables)
    Invalid(serde_json::Value),
}

impl ScaleValue {
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(px) => Some(*px),
            Self::Css(_) | Self::Invalid(_) => None,
        }
    }

    /// Render as a CSS length; bare numbers are pixels
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(px) => format_px(*px),
            Self::Css(text) => text.clone(),
            Self::Invalid(value) => value.to_string(),
        }
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for ScaleValue {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for ScaleValue {
    fn from(text: &str) -> Self {
        Self::Css(text.to_string())
    }
}

fn default_base() -> f64 {
    16.0
}

fn default_ratio() -> f64 {
    1.25
}

fn default_min_scale() -> f64 {
    1.0
}

fn default_max_scale() -> f64 {
    1.25
}

fn default_min_viewport() -> f64 {
    320.0
}

fn default_max_viewport() -> f64 {
    1280.0
}

fn default_true() -> bool {
    true
}

/// Declarative scale configuration, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScaleConfig {
    Modular(ModularScale),
    Fixed(FixedScale),
    Fluid(FluidScale),
    Custom(CustomScale),
    /// A missing or unrecognised `type`; degrades to the default scale
    Unknown,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KnownScale {
    Modular(ModularScale),
    Fixed(FixedScale),
    Fluid(FluidScale),
    Custom(CustomScale),
}

impl From<KnownScale> for ScaleConfig {
    fn from(scale: KnownScale) -> Self {
        match scale {
            KnownScale::Modular(modular) => Self::Modular(modular),
            KnownScale::Fixed(fixed) => Self::Fixed(fixed),
            KnownScale::Fluid(fluid) => Self::Fluid(fluid),
            KnownScale::Custom(custom) => Self::Custom(custom),
        }
    }
}

// The `type` key is read first so a scale block without one (or with a
// non-string one) still loads.
impl<'de> Deserialize<'de> for ScaleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some("modular" | "fixed" | "fluid" | "custom") => KnownScale::deserialize(value)
                .map(Self::from)
                .map_err(D::Error::custom),
            _ => Ok(Self::Unknown),
        }
    }
}

impl ScaleConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Modular(_) => "modular",
            Self::Fixed(_) => "fixed",
            Self::Fluid(_) => "fluid",
            Self::Custom(_) => "custom",
            Self::Unknown => "unknown",
        }
    }
}

/// `base * ratio^n` for each named step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModularScale {
    #[serde(default = "default_base")]
    pub base: f64,
    #[serde(default = "default_ratio")]
    pub ratio: f64,
}

impl Default for ModularScale {
    fn default() -> Self {
        Self {
            base: default_base(),
            ratio: default_ratio(),
        }
    }
}

/// Explicit pixel sizes per step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedScale {
    #[serde(default)]
    pub values: IndexMap<String, ScaleValue>,
}

/// Viewport-interpolated sizes emitted as `clamp()` expressions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidScale {
    #[serde(default = "default_base")]
    pub base: f64,
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    #[serde(default = "default_min_viewport")]
    pub min_viewport: f64,
    #[serde(default = "default_max_viewport")]
    pub max_viewport: f64,
}

impl Default for FluidScale {
    fn default() -> Self {
        Self {
            base: default_base(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            min_viewport: default_min_viewport(),
            max_viewport: default_max_viewport(),
        }
    }
}

/// Arbitrary key -> value pass-through
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomScale {
    #[serde(default)]
    pub values: IndexMap<String, ScaleValue>,
}

/// CSS `font-display` strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontDisplay {
    Auto,
    Block,
    #[default]
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Block => "block",
            Self::Swap => "swap",
            Self::Fallback => "fallback",
            Self::Optional => "optional",
        }
    }
}

/// CSS `font-style` of a face
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

/// Hand-written override descriptors; each replaces the computed one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascent_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descent_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_gap_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_adjust: Option<String>,
}

impl AdjustmentOverrides {
    pub fn is_empty(&self) -> bool {
        self.ascent_override.is_none()
            && self.descent_override.is_none()
            && self.line_gap_override.is_none()
            && self.size_adjust.is_none()
    }
}

/// How a font falls back while (or if) the web font is unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackConfig {
    /// Local system font to adjust; picked by metric similarity when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Compute override descriptors from metrics
    #[serde(default = "default_true")]
    pub auto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<AdjustmentOverrides>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            font: None,
            auto: true,
            overrides: None,
        }
    }
}

/// Valid numeric `font-weight` keys for font files
pub const VALID_WEIGHTS: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Parse a `files` key into a weight, accepting only 100..=900 in steps of 100
pub fn parse_weight(key: &str) -> Option<u16> {
    key.trim()
        .parse::<u16>()
        .ok()
        .filter(|weight| VALID_WEIGHTS.contains(weight))
}

/// A named web font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDefinition {
    pub name: String,
    /// Weight key -> file path; keys stay as written so bad ones can be reported
    #[serde(default)]
    pub files: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackConfig>,
    #[serde(default)]
    pub display: FontDisplay,
    #[serde(default)]
    pub preload: bool,
    /// CSS custom property to expose the family list under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FontStyle>,
}

impl FontDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: IndexMap::new(),
            fallback: None,
            display: FontDisplay::default(),
            preload: false,
            variable: None,
            style: None,
        }
    }

    pub fn with_file(mut self, weight: u16, path: impl Into<String>) -> Self {
        self.files.insert(weight.to_string(), path.into());
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackConfig) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn with_preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    /// Valid `(weight, path)` pairs sorted by weight; invalid keys are skipped
    pub fn weighted_files(&self) -> Vec<(u16, &str)> {
        let mut files: Vec<(u16, &str)> = self
            .files
            .iter()
            .filter_map(|(key, path)| parse_weight(key).map(|w| (w, path.as_str())))
            .collect();
        files.sort_by_key(|(weight, _)| *weight);
        files
    }

    /// Name of the metric-adjusted fallback face
    pub fn fallback_family(&self) -> String {
        format!("{} Fallback", self.name)
    }

    /// Configured fallback system font, if any
    pub fn fallback_font(&self) -> Option<&str> {
        self.fallback.as_ref().and_then(|f| f.font.as_deref())
    }

    pub fn font_style(&self) -> FontStyle {
        self.style.unwrap_or_default()
    }
}

/// `fontSize` of a variant: a scale key or a literal pixel value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSizeRef {
    Px(f64),
    Key(String),
}

impl From<&str> for FontSizeRef {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<f64> for FontSizeRef {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

/// A number or a literal CSS value, copied through verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl CssValue {
    pub fn to_css(&self) -> String {
        match self {
            Self::Number(n) => format_number(*n, 4),
            Self::Text(text) => text.clone(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for CssValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Declarative text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDefinition {
    pub font_size: FontSizeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<CssValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<CssValue>,
    /// Key into the font map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Preset name (`tight`, `wide`, ...) or a literal CSS value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

impl VariantDefinition {
    pub fn new(font_size: impl Into<FontSizeRef>) -> Self {
        Self {
            font_size: font_size.into(),
            font_weight: None,
            line_height: None,
            font_family: None,
            letter_spacing: None,
            text_transform: None,
            font_style: None,
        }
    }

    pub fn weight(mut self, weight: impl Into<CssValue>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn line_height(mut self, line_height: impl Into<CssValue>) -> Self {
        self.line_height = Some(line_height.into());
        self
    }

    pub fn family(mut self, key: impl Into<String>) -> Self {
        self.font_family = Some(key.into());
        self
    }

    pub fn letter_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.letter_spacing = Some(spacing.into());
        self
    }
}

/// Fully resolved, render-ready counterpart of [`VariantDefinition`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedVariantStyles {
    pub font_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

impl ComputedVariantStyles {
    /// `(css-property, value)` pairs in a stable order
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        let mut declarations = Vec::with_capacity(7);
        if let Some(family) = &self.font_family {
            declarations.push(("font-family", family.as_str()));
        }
        declarations.push(("font-size", self.font_size.as_str()));
        let optional = [
            ("font-weight", &self.font_weight),
            ("line-height", &self.line_height),
            ("letter-spacing", &self.letter_spacing),
            ("text-transform", &self.text_transform),
            ("font-style", &self.font_style),
        ];
        for (property, value) in optional {
            if let Some(value) = value {
                declarations.push((property, value.as_str()));
            }
        }
        declarations
    }

    /// Inline declaration list, e.g. `font-size: 16px; font-weight: 700;`
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
