//! SCSS variables and one mixin per variant

use crate::error::Result;
use crate::tokens::{TokenExporter, TokenSet};

pub struct ScssExporter;

impl TokenExporter for ScssExporter {
    fn name(&self) -> &'static str {
        "scss"
    }

    fn export(&self, tokens: &TokenSet) -> Result<String> {
        let mut scss = String::new();

        if !tokens.fonts.is_empty() {
            scss.push_str("// Fonts\n");
            for font in tokens.fonts.values() {
                let name = font.variable.trim_start_matches('-');
                scss.push_str(&format!("${name}: {};\n", font.stack));
            }
            scss.push('\n');
        }

        if !tokens.scale.is_empty() {
            scss.push_str("// Scale\n");
            for (step, value) in &tokens.scale {
                scss.push_str(&format!("$font-size-{step}: {};\n", value.to_css()));
            }
            scss.push('\n');
        }

        if !tokens.variants.is_empty() {
            scss.push_str("// Variants\n");
            for (name, styles) in &tokens.variants {
                scss.push_str(&format!("@mixin text-{name} {{\n"));
                for (property, value) in styles.declarations() {
                    scss.push_str(&format!("  {property}: {value};\n"));
                }
                scss.push_str("}\n");
            }
        }

        Ok(scss)
    }

    fn extension(&self) -> &'static str {
        "scss"
    }

    fn mime_type(&self) -> &'static str {
        "text/x-scss"
    }
}
