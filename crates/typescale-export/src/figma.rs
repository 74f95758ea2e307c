//! Tokens Studio (Figma) JSON

use serde_json::{json, Map, Value};

use crate::error::{ExportError, Result};
use crate::tokens::{family_names, TokenExporter, TokenSet};

pub struct FigmaExporter;

/// Figma wants unitless pixel sizes
fn strip_px(value: &str) -> String {
    value.strip_suffix("px").unwrap_or(value).to_string()
}

fn token(value: Value, kind: &str) -> Value {
    json!({ "value": value, "type": kind })
}

impl TokenExporter for FigmaExporter {
    fn name(&self) -> &'static str {
        "figma"
    }

    fn export(&self, tokens: &TokenSet) -> Result<String> {
        let mut families = Map::new();
        for (key, font) in &tokens.fonts {
            families.insert(key.clone(), token(json!(font.family), "fontFamilies"));
        }

        let mut sizes = Map::new();
        for (step, value) in &tokens.scale {
            sizes.insert(step.clone(), token(json!(strip_px(&value.to_css())), "fontSizes"));
        }

        let mut typography = Map::new();
        for (name, styles) in &tokens.variants {
            let mut value = Map::new();
            if let Some(family) = styles
                .font_family
                .as_deref()
                .and_then(|stack| family_names(stack).into_iter().next())
            {
                value.insert("fontFamily".into(), json!(family));
            }
            if let Some(weight) = &styles.font_weight {
                value.insert("fontWeight".into(), json!(weight));
            }
            value.insert("fontSize".into(), json!(strip_px(&styles.font_size)));
            if let Some(line_height) = &styles.line_height {
                value.insert("lineHeight".into(), json!(line_height));
            }
            if let Some(spacing) = &styles.letter_spacing {
                value.insert("letterSpacing".into(), json!(spacing));
            }
            typography.insert(name.clone(), token(Value::Object(value), "typography"));
        }

        let document = json!({
            "fontFamilies": families,
            "fontSizes": sizes,
            "typography": typography,
        });
        serde_json::to_string_pretty(&document).map_err(|e| ExportError::EncodingFailed(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}
