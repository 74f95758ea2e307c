//! `tailwind.config.js` theme extension

use serde_json::{json, Map, Value};

use crate::error::{ExportError, Result};
use crate::tokens::{family_names, TokenExporter, TokenSet};

/// `fontFamily` and `fontSize` under `theme.extend`.
///
/// Scale steps become plain sizes; variants become `[size, { lineHeight, ... }]`.
pub struct TailwindExporter;

impl TokenExporter for TailwindExporter {
    fn name(&self) -> &'static str {
        "tailwind"
    }

    fn export(&self, tokens: &TokenSet) -> Result<String> {
        let mut font_family = Map::new();
        for (key, font) in &tokens.fonts {
            font_family.insert(key.clone(), json!(family_names(&font.stack)));
        }

        let mut font_size = Map::new();
        for (step, value) in &tokens.scale {
            font_size.insert(step.clone(), Value::String(value.to_css()));
        }
        for (name, styles) in &tokens.variants {
            let mut extra = Map::new();
            let fields = [
                ("lineHeight", &styles.line_height),
                ("fontWeight", &styles.font_weight),
                ("letterSpacing", &styles.letter_spacing),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    extra.insert(field.to_string(), Value::String(value.clone()));
                }
            }
            let entry = if extra.is_empty() {
                Value::String(styles.font_size.clone())
            } else {
                json!([styles.font_size, extra])
            };
            font_size.insert(name.clone(), entry);
        }

        let config = json!({
            "theme": {
                "extend": {
                    "fontFamily": font_family,
                    "fontSize": font_size,
                }
            }
        });
        let body = serde_json::to_string_pretty(&config)
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        Ok(format!("module.exports = {body};\n"))
    }

    fn extension(&self) -> &'static str {
        "js"
    }

    fn mime_type(&self) -> &'static str {
        "text/javascript"
    }
}
