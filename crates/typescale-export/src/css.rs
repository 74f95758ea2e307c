//! CSS text for fonts, fallback faces, preload hints and custom properties

use std::collections::HashSet;

use typescale_core::format::css_string;
use typescale_core::variant::font_family_stack;
use typescale_core::{ComputedScale, ComputedVariants, FontDefinition, FontMap};
use typescale_fontdb::{resolve_fallback, ResolvedFallback};

use crate::error::{ExportError, Result};

/// `format()` hint for a font file, from its extension
fn font_format(path: &str) -> Option<&'static str> {
    let lower = path.to_ascii_lowercase();
    let lower = lower.split(['?', '#']).next().unwrap_or_default();
    let ext = lower.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "woff2" => Some("woff2"),
        "woff" => Some("woff"),
        "ttf" => Some("truetype"),
        "otf" => Some("opentype"),
        "eot" => Some("embedded-opentype"),
        _ => None,
    }
}

/// MIME type used in a preload hint
fn font_mime(path: &str) -> &'static str {
    match font_format(path) {
        Some("woff") => "font/woff",
        Some("truetype") => "font/ttf",
        Some("opentype") => "font/otf",
        _ => "font/woff2",
    }
}

/// One `@font-face` rule for a single weight of a web font
pub fn generate_font_face(font: &FontDefinition, weight: u16, path: &str) -> String {
    let url = css_string(path);
    let src = match font_format(path) {
        Some(format) => format!("url({url}) format('{format}')"),
        None => format!("url({url})"),
    };
    format!(
        "@font-face {{\n  font-family: {};\n  src: {src};\n  font-weight: {weight};\n  font-style: {};\n  font-display: {};\n}}\n",
        css_string(&font.name),
        font.font_style().as_str(),
        font.display.as_str(),
    )
}

/// The metric-adjusted `@font-face` pointing at a local system font
pub fn generate_fallback_font_face(resolved: &ResolvedFallback) -> String {
    let mut css = format!(
        "@font-face {{\n  font-family: {};\n  src: local({});\n",
        css_string(&resolved.family),
        css_string(&resolved.local_font)
    );
    let descriptors = [
        ("ascent-override", &resolved.descriptors.ascent_override),
        ("descent-override", &resolved.descriptors.descent_override),
        ("line-gap-override", &resolved.descriptors.line_gap_override),
        ("size-adjust", &resolved.descriptors.size_adjust),
    ];
    for (property, value) in descriptors {
        if let Some(value) = value {
            css.push_str(&format!("  {property}: {value};\n"));
        }
    }
    css.push_str("}\n");
    css
}

/// Every weight of one font followed by its fallback face
pub fn generate_font_css(font: &FontDefinition) -> String {
    let mut css: Vec<String> = font
        .weighted_files()
        .into_iter()
        .map(|(weight, path)| generate_font_face(font, weight, path))
        .collect();
    css.push(generate_fallback_font_face(&resolve_fallback(font)));
    css.join("\n")
}

/// CSS for one font key
pub fn generate_single_font_css(fonts: &FontMap, key: &str) -> Result<String> {
    fonts
        .get(key)
        .map(generate_font_css)
        .ok_or_else(|| ExportError::UnknownFont(key.to_string()))
}

/// CSS for the listed keys, in the order given; unknown keys are skipped
pub fn generate_selected_fonts_css<S: AsRef<str>>(fonts: &FontMap, keys: &[S]) -> String {
    keys.iter()
        .filter_map(|key| {
            let key = key.as_ref();
            let font = fonts.get(key);
            if font.is_none() {
                log::warn!("Skipping unknown font key '{key}'");
            }
            font.map(generate_font_css)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSS for every font, in declaration order
pub fn generate_all_fonts_css(fonts: &FontMap) -> String {
    log::debug!("Generating CSS for {} font(s)", fonts.len());
    fonts
        .values()
        .map(generate_font_css)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A `<link rel="preload">` hint for one font file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadLink {
    pub href: String,
    pub mime_type: &'static str,
}

impl PreloadLink {
    pub fn to_html(&self) -> String {
        format!(
            "<link rel=\"preload\" href=\"{}\" as=\"font\" type=\"{}\" crossorigin>",
            self.href, self.mime_type
        )
    }
}

/// Preload hints for each file of one font, whether or not it is marked
/// `preload`
pub fn font_preload_links(font: &FontDefinition) -> Vec<PreloadLink> {
    font.weighted_files()
        .into_iter()
        .map(|(_, path)| PreloadLink {
            href: path.to_string(),
            mime_type: font_mime(path),
        })
        .collect()
}

/// Preload hints for every file of every `preload` font, first occurrence of
/// each href only
pub fn preload_links(fonts: &FontMap) -> Vec<PreloadLink> {
    let mut seen = HashSet::new();
    fonts
        .values()
        .filter(|font| font.preload)
        .flat_map(font_preload_links)
        .filter(|link| seen.insert(link.href.clone()))
        .collect()
}

/// [`preload_links`] rendered as HTML, one per line
pub fn generate_preload_links(fonts: &FontMap) -> String {
    preload_links(fonts)
        .iter()
        .map(PreloadLink::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Custom property a font's family list is exposed under
pub fn font_variable_name(key: &str, font: &FontDefinition) -> String {
    font.variable
        .clone()
        .unwrap_or_else(|| format!("--font-{key}"))
}

fn root_block(declarations: Vec<String>) -> String {
    if declarations.is_empty() {
        return String::new();
    }
    let mut css = String::from(":root {\n");
    for declaration in declarations {
        css.push_str(&format!("  {declaration}\n"));
    }
    css.push_str("}\n");
    css
}

/// `:root { --font-<key>: <family list>; }`
pub fn generate_font_variables(fonts: &FontMap) -> String {
    root_block(
        fonts
            .iter()
            .map(|(key, font)| {
                format!("{}: {};", font_variable_name(key, font), font_family_stack(font))
            })
            .collect(),
    )
}

/// `:root { --font-size-<step>: <size>; }`
pub fn generate_scale_variables(scale: &ComputedScale) -> String {
    root_block(
        scale
            .iter()
            .map(|(step, value)| format!("--font-size-{step}: {};", value.to_css()))
            .collect(),
    )
}

/// One `.text-<name>` class per resolved variant
pub fn generate_variant_classes(variants: &ComputedVariants) -> String {
    variants
        .iter()
        .map(|(name, styles)| {
            let mut css = format!(".text-{name} {{\n");
            for (property, value) in styles.declarations() {
                css.push_str(&format!("  {property}: {value};\n"));
            }
            css.push_str("}\n");
            css
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use typescale_core::{
        AdjustmentOverrides, ComputedVariantStyles, FallbackConfig, FontDisplay, FontStyle,
        ScaleValue,
    };

    fn fonts() -> FontMap {
        let mut fonts = FontMap::new();
        fonts.insert(
            "heading".into(),
            FontDefinition::new("Inter")
                .with_file(700, "/fonts/inter-700.woff2")
                .with_file(400, "/fonts/inter-400.woff2")
                .with_fallback(FallbackConfig {
                    font: Some("Arial".into()),
                    ..FallbackConfig::default()
                })
                .with_preload(true),
        );
        let mut mono = FontDefinition::new("JetBrains Mono").with_file(400, "/fonts/jb.ttf");
        mono.display = FontDisplay::Optional;
        mono.style = Some(FontStyle::Italic);
        mono.variable = Some("--font-code".into());
        fonts.insert("mono".into(), mono);
        fonts
    }

    #[test]
    fn test_font_face() {
        let fonts = fonts();
        assert_eq!(
            generate_font_face(&fonts["heading"], 700, "/fonts/inter-700.woff2"),
            "@font-face {\n  font-family: 'Inter';\n  src: url('/fonts/inter-700.woff2') format('woff2');\n  font-weight: 700;\n  font-style: normal;\n  font-display: swap;\n}\n"
        );
    }

    #[test]
    fn test_font_face_format_and_style() {
        let css = generate_font_face(&fonts()["mono"], 400, "/fonts/jb.ttf");
        assert!(css.contains("format('truetype')"));
        assert!(css.contains("font-style: italic;"));
        assert!(css.contains("font-display: optional;"));

        let odd = generate_font_face(&FontDefinition::new("Odd"), 400, "/fonts/odd.bin");
        assert!(odd.contains("src: url('/fonts/odd.bin');"));
    }

    #[test]
    fn test_font_face_escapes_quotes_and_backslashes() {
        let font = FontDefinition::new("O'Neil Sans");
        let css = generate_font_face(&font, 400, r"/fonts/o'neil\regular.woff2");
        assert!(css.contains(r"font-family: 'O\'Neil Sans';"), "{css}");
        assert!(css.contains(r"src: url('/fonts/o\'neil\\regular.woff2') format('woff2');"), "{css}");

        let fallback = generate_font_css(&font.with_file(400, "/fonts/oneil.woff2"));
        assert!(fallback.contains(r"font-family: 'O\'Neil Sans Fallback';"), "{fallback}");
    }

    #[test]
    fn test_fallback_face() {
        let resolved = ResolvedFallback {
            family: "Inter Fallback".into(),
            local_font: "Arial".into(),
            metrics_source: typescale_fontdb::MetricsSource::Table,
            descriptors: AdjustmentOverrides {
                ascent_override: Some("96.90%".into()),
                size_adjust: Some("105.01%".into()),
                ..AdjustmentOverrides::default()
            },
        };
        assert_eq!(
            generate_fallback_font_face(&resolved),
            "@font-face {\n  font-family: 'Inter Fallback';\n  src: local('Arial');\n  ascent-override: 96.90%;\n  size-adjust: 105.01%;\n}\n"
        );
    }

    #[test]
    fn test_font_css_orders_weights_then_fallback() {
        let css = generate_font_css(&fonts()["heading"]);
        let regular = css.find("font-weight: 400").unwrap();
        let bold = css.find("font-weight: 700").unwrap();
        let fallback = css.find("'Inter Fallback'").unwrap();
        assert!(regular < bold && bold < fallback);
        assert!(css.contains("src: local('Arial');"));
        assert!(css.contains("ascent-override: 90.00%;"));
    }

    #[test]
    fn test_single_font_unknown_key() {
        assert!(generate_single_font_css(&fonts(), "heading").is_ok());
        assert!(matches!(
            generate_single_font_css(&fonts(), "display"),
            Err(ExportError::UnknownFont(key)) if key == "display"
        ));
    }

    #[test]
    fn test_selected_fonts_skip_unknown() {
        let css = generate_selected_fonts_css(&fonts(), &["mono", "missing"]);
        assert!(css.contains("'JetBrains Mono'"));
        assert!(!css.contains("'Inter'"));
        assert_eq!(generate_selected_fonts_css::<&str>(&fonts(), &[]), "");
    }

    #[test]
    fn test_all_fonts_in_declaration_order() {
        let css = generate_all_fonts_css(&fonts());
        assert!(css.find("'Inter'").unwrap() < css.find("'JetBrains Mono'").unwrap());
    }

    #[test]
    fn test_preload_links_dedupe_by_href() {
        let mut fonts = fonts();
        fonts.insert(
            "heading-alt".into(),
            FontDefinition::new("Inter Display")
                .with_file(700, "/fonts/inter-700.woff2")
                .with_preload(true),
        );
        let links = preload_links(&fonts);
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/fonts/inter-400.woff2", "/fonts/inter-700.woff2"]);
        assert_eq!(
            links[0].to_html(),
            "<link rel=\"preload\" href=\"/fonts/inter-400.woff2\" as=\"font\" type=\"font/woff2\" crossorigin>"
        );
        assert_eq!(generate_preload_links(&fonts).lines().count(), 2);
    }

    #[test]
    fn test_font_variables() {
        assert_eq!(
            generate_font_variables(&fonts()),
            ":root {\n  --font-heading: Inter, 'Inter Fallback', Arial;\n  --font-code: 'JetBrains Mono', 'JetBrains Mono Fallback', monospace;\n}\n"
        );
        assert_eq!(generate_font_variables(&FontMap::new()), "");
    }

    #[test]
    fn test_scale_variables() {
        let mut scale = ComputedScale::new();
        scale.insert("base".into(), ScaleValue::Px(16.0));
        scale.insert("xl".into(), ScaleValue::Css("clamp(1rem, 2vw, 2rem)".into()));
        assert_eq!(
            generate_scale_variables(&scale),
            ":root {\n  --font-size-base: 16px;\n  --font-size-xl: clamp(1rem, 2vw, 2rem);\n}\n"
        );
    }

    #[test]
    fn test_variant_classes() {
        let mut variants = ComputedVariants::new();
        variants.insert(
            "h1".into(),
            ComputedVariantStyles {
                font_size: "61.04px".into(),
                font_weight: Some("700".into()),
                ..ComputedVariantStyles::default()
            },
        );
        assert_eq!(
            generate_variant_classes(&variants),
            ".text-h1 {\n  font-size: 61.04px;\n  font-weight: 700;\n}\n"
        );
    }
}
