//! Integration tests for the Typescale pipeline: config to page head

use std::sync::Arc;

use typescale::loader::{FontDescriptor, LoadFailure, FONT_STYLE_ID};
use typescale::prelude::*;

const SITE: &str = r#"{
    "scale": { "type": "fluid", "base": 16, "minScale": 1.0, "maxScale": 1.25 },
    "fonts": {
        "display": {
            "name": "Playfair Display",
            "files": { "400": "/fonts/playfair.woff2", "700": "/fonts/playfair-700.woff2" },
            "preload": true,
            "fallback": { "font": "Georgia" }
        },
        "text": { "name": "Roboto", "files": { "400": "/fonts/roboto.woff2" } }
    },
    "variants": {
        "h1": { "fontSize": "4xl", "fontWeight": 700, "fontFamily": "display" },
        "body": { "fontSize": "base", "lineHeight": 1.6, "fontFamily": "text" }
    },
    "optimization": { "loading": "eager" }
}"#;

/// Every font except Roboto is fetched successfully
struct CdnWithoutRoboto;

impl FontSource for CdnWithoutRoboto {
    fn load(&self, descriptor: &FontDescriptor) -> std::result::Result<(), LoadFailure> {
        if descriptor.family == "Roboto" {
            Err(LoadFailure::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[test]
fn test_full_pipeline() {
    let config = TypographyConfig::from_json_str(SITE).unwrap();
    let context = TypographyContext::new(config).unwrap();
    assert!(context.report().is_valid());
    assert!(context.diagnostics().is_empty());

    let h1 = context.variant("h1").unwrap();
    assert!(h1.font_size.starts_with("clamp("), "{}", h1.font_size);
    assert_eq!(
        h1.font_family.as_deref(),
        Some("'Playfair Display', 'Playfair Display Fallback', Georgia")
    );

    let sink = Arc::new(MemoryStyleSink::new());
    let manager =
        FontLoadingManager::from_config(context.config(), Arc::new(CdnWithoutRoboto), sink.clone());
    let summary = manager.start();
    assert_eq!(summary.loaded_fonts, ["display"]);
    assert_eq!(summary.failed_fonts, ["text"]);
    assert!(summary.layout_stable);

    let head = sink.to_html();
    assert!(head.starts_with("<link rel=\"preload\" href=\"/fonts/playfair.woff2\""));
    assert!(head.contains(&format!("<style id=\"{FONT_STYLE_ID}\">")));
    assert!(head.contains("src: local('Georgia');"));
    assert!(head.contains("font-family: 'Roboto Fallback';"));

    let element = TextElement::builder(&context).variant("body").build().unwrap();
    let html = element.to_html("Hello");
    assert!(html.starts_with("<p class=\"text-body\""));
    assert!(html.contains("line-height: 1.6;"));
}

#[test]
fn test_tokens_from_context() {
    let config = TypographyConfig::from_json_str(SITE).unwrap();
    let context = TypographyContext::new(config).unwrap();
    let tokens = TokenSet::from_context(&context);

    let json = exporter_for(TokenFormat::Json).export(&tokens).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.is_object());

    let css = exporter_for(TokenFormat::CssVars).export(&tokens).unwrap();
    assert!(css.contains("--font-display:"));
}

#[test]
fn test_fallback_metrics_from_prelude() {
    let font = FontDefinition::new("Helvetica Neue").with_file(400, "/hn.woff2");
    let resolved = resolve_fallback(&font);
    assert_eq!(resolved.family, "Helvetica Neue Fallback");

    let metrics = get_metrics("Helvetica Neue").unwrap();
    let adjustments = calculate_fallback_adjustments(&metrics, &resolved.local_font);
    assert_eq!(resolved.descriptors.size_adjust, Some(adjustments.size_adjust));
}
