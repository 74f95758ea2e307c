//! Design tokens: the export-facing view of fonts, scale and variants

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use typescale_core::variant::font_family_stack;
use typescale_core::{ComputedScale, ComputedVariants, FontMap, TypographyContext};
use typescale_fontdb::resolve_fallback;

use crate::css::font_variable_name;
use crate::error::{ExportError, Result};
use crate::{CssVarsExporter, FigmaExporter, JsonExporter, ScssExporter, TailwindExporter};

/// A font as tokens see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontToken {
    pub family: String,
    /// Full CSS family list including the fallback face
    pub stack: String,
    pub variable: String,
    pub weights: Vec<u16>,
    pub fallback: String,
}

/// Everything an exporter serializes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenSet {
    pub fonts: IndexMap<String, FontToken>,
    pub scale: ComputedScale,
    pub variants: ComputedVariants,
}

impl TokenSet {
    pub fn new(fonts: &FontMap, scale: ComputedScale, variants: ComputedVariants) -> Self {
        let fonts = fonts
            .iter()
            .map(|(key, font)| {
                let token = FontToken {
                    family: font.name.clone(),
                    stack: font_family_stack(font),
                    variable: font_variable_name(key, font),
                    weights: font.weighted_files().into_iter().map(|(w, _)| w).collect(),
                    fallback: resolve_fallback(font).local_font,
                };
                (key.clone(), token)
            })
            .collect();
        Self {
            fonts,
            scale,
            variants,
        }
    }

    pub fn from_context(context: &TypographyContext) -> Self {
        Self::new(
            context.fonts(),
            context.scale().clone(),
            context.variants().clone(),
        )
    }
}

/// Split a CSS family list into bare names
pub(crate) fn family_names(stack: &str) -> Vec<String> {
    stack
        .split(',')
        .map(|name| name.trim().trim_matches(['\'', '"']).to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Turns a [`TokenSet`] into one textual format
pub trait TokenExporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn export(&self, tokens: &TokenSet) -> Result<String>;

    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

/// Supported token formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenFormat {
    CssVars,
    Tailwind,
    Json,
    Scss,
    Figma,
}

impl TokenFormat {
    pub const ALL: [TokenFormat; 5] = [
        Self::CssVars,
        Self::Tailwind,
        Self::Json,
        Self::Scss,
        Self::Figma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CssVars => "css-vars",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
            Self::Scss => "scss",
            Self::Figma => "figma",
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| ExportError::UnknownFormat(s.to_string()))
    }
}

pub fn exporter_for(format: TokenFormat) -> Box<dyn TokenExporter> {
    match format {
        TokenFormat::CssVars => Box::new(CssVarsExporter),
        TokenFormat::Tailwind => Box::new(TailwindExporter),
        TokenFormat::Json => Box::new(JsonExporter::with_pretty_print()),
        TokenFormat::Scss => Box::new(ScssExporter),
        TokenFormat::Figma => Box::new(FigmaExporter),
    }
}

#[cfg(test)]
pub(crate) fn sample_tokens() -> TokenSet {
    use typescale_core::{
        calculate_modular_scale, resolve_all_variants, FallbackConfig, FontDefinition,
        ScaleValue, VariantDefinition, VariantMap,
    };

    let mut fonts = FontMap::new();
    fonts.insert(
        "heading".into(),
        FontDefinition::new("Inter")
            .with_file(400, "/fonts/inter-400.woff2")
            .with_file(700, "/fonts/inter-700.woff2")
            .with_fallback(FallbackConfig {
                font: Some("Arial".into()),
                ..FallbackConfig::default()
            }),
    );

    let mut scale = calculate_modular_scale(16.0, 1.25);
    scale.insert("fluid".into(), ScaleValue::Css("clamp(1rem, 2vw, 2rem)".into()));

    let mut variants = VariantMap::new();
    variants.insert(
        "h1".into(),
        VariantDefinition::new("5xl")
            .weight(700.0)
            .line_height(1.1)
            .family("heading")
            .letter_spacing("tight"),
    );
    variants.insert("body".into(), VariantDefinition::new("base"));
    let variants = resolve_all_variants(&variants, &scale, &fonts).into_value();

    TokenSet::new(&fonts, scale, variants)
}
