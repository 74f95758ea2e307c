//! Variant resolution: declarative style + scale + fonts -> CSS-ready values
//!
//! Resolution order for each variant:
//!
//! 1. `fontSize` - scale key lookup, then a numeric parse of the key, then
//!    the scale's `base` (or 16px). Every fallback is a diagnostic.
//! 2. `fontWeight` / `lineHeight` - copied verbatim.
//! 3. `fontFamily` - font key expanded to `Name, 'Name Fallback', <fallback>`.
//! 4. `letterSpacing` - presets map to em values, anything else passes through.

use crate::diagnostics::{Computed, Diagnostics};
use crate::format::{css_string, format_px};
use crate::types::{
    ComputedScale, ComputedVariantStyles, ComputedVariants, FontDefinition, FontMap, FontSizeRef,
    VariantDefinition, VariantMap,
};

/// Letter-spacing presets
pub const LETTER_SPACING_PRESETS: [(&str, &str); 6] = [
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0em"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

const DEFAULT_FONT_SIZE: &str = "16px";

pub fn letter_spacing_preset(name: &str) -> Option<&'static str> {
    LETTER_SPACING_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, value)| *value)
}

/// Generic CSS family guessed from a font name
pub fn generic_family(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();
    if lower.contains("mono") || lower.contains("code") {
        "monospace"
    } else if lower.contains("serif") && !lower.contains("sans") {
        "serif"
    } else {
        "sans-serif"
    }
}

/// Quote family names that are not a single plain identifier
pub fn quote_family(name: &str) -> String {
    let plain = !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_');
    if plain {
        name.to_string()
    } else {
        css_string(name)
    }
}

/// `Name, 'Name Fallback', <fallback font or generic>`
pub fn font_family_stack(font: &FontDefinition) -> String {
    let last = match font.fallback_font() {
        Some(fallback) => quote_family(fallback),
        None => generic_family(&font.name).to_string(),
    };
    [quote_family(&font.name), quote_family(&font.fallback_family()), last].join(", ")
}

fn base_size(scale: &ComputedScale) -> String {
    scale
        .get("base")
        .map(|value| value.to_css())
        .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string())
}

fn resolve_font_size(
    size: &FontSizeRef,
    scale: &ComputedScale,
    path: &str,
    diagnostics: &mut Diagnostics,
) -> String {
    let key = match size {
        FontSizeRef::Px(px) if px.is_finite() && *px > 0.0 => return format_px(*px),
        FontSizeRef::Px(px) => {
            diagnostics.warn(
                path,
                format!("Font size must be positive, got {px}; using the base size"),
            );
            return base_size(scale);
        },
        FontSizeRef::Key(key) => key,
    };

    if let Some(value) = scale.get(key) {
        return value.to_css();
    }

    if let Ok(px) = key.trim().parse::<f64>() {
        if px.is_finite() && px > 0.0 {
            diagnostics.warn(
                path,
                format!("'{key}' is not a scale step; treating it as {px}px"),
            );
            return format_px(px);
        }
    }

    diagnostics.warn(
        path,
        format!("Unknown scale step '{key}'; using the base size"),
    );
    base_size(scale)
}

fn resolve_variant_at(
    prefix: &str,
    variant: &VariantDefinition,
    scale: &ComputedScale,
    fonts: &FontMap,
    diagnostics: &mut Diagnostics,
) -> ComputedVariantStyles {
    let font_size = resolve_font_size(
        &variant.font_size,
        scale,
        &format!("{prefix}.fontSize"),
        diagnostics,
    );

    let font_family = variant.font_family.as_ref().map(|key| match fonts.get(key) {
        Some(font) => font_family_stack(font),
        None => {
            diagnostics.warn(
                format!("{prefix}.fontFamily"),
                format!("Unknown font '{key}'; using it as a literal family list"),
            );
            key.clone()
        },
    });

    let letter_spacing = variant.letter_spacing.as_ref().map(|spacing| {
        letter_spacing_preset(spacing)
            .map(str::to_string)
            .unwrap_or_else(|| spacing.clone())
    });

    ComputedVariantStyles {
        font_size,
        font_weight: variant.font_weight.as_ref().map(|w| w.to_css()),
        line_height: variant.line_height.as_ref().map(|lh| lh.to_css()),
        font_family,
        letter_spacing,
        text_transform: variant.text_transform.clone(),
        font_style: variant.font_style.clone(),
    }
}

/// Resolve one variant. Never fails.
pub fn resolve_variant(
    variant: &VariantDefinition,
    scale: &ComputedScale,
    fonts: &FontMap,
) -> Computed<ComputedVariantStyles> {
    let mut diagnostics = Diagnostics::new();
    let styles = resolve_variant_at("variant", variant, scale, fonts, &mut diagnostics);
    Computed::new(styles, diagnostics)
}

/// Resolve every variant, keyed by name
pub fn resolve_all_variants(
    variants: &VariantMap,
    scale: &ComputedScale,
    fonts: &FontMap,
) -> Computed<ComputedVariants> {
    let mut diagnostics = Diagnostics::new();
    let resolved = variants
        .iter()
        .map(|(name, variant)| {
            let prefix = format!("variants.{name}");
            let styles = resolve_variant_at(&prefix, variant, scale, fonts, &mut diagnostics);
            (name.clone(), styles)
        })
        .collect();
    log::debug!("Resolved {} variant(s)", variants.len());
    Computed::new(resolved, diagnostics)
}
