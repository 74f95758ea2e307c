//! CSS custom properties on `:root`

use crate::error::Result;
use crate::tokens::{TokenExporter, TokenSet};

/// Fonts, scale steps and every variant property as `--` variables
pub struct CssVarsExporter;

impl TokenExporter for CssVarsExporter {
    fn name(&self) -> &'static str {
        "css-vars"
    }

    fn export(&self, tokens: &TokenSet) -> Result<String> {
        let mut css = String::from(":root {\n");

        for font in tokens.fonts.values() {
            css.push_str(&format!("  {}: {};\n", font.variable, font.stack));
        }
        for (step, value) in &tokens.scale {
            css.push_str(&format!("  --font-size-{step}: {};\n", value.to_css()));
        }
        for (name, styles) in &tokens.variants {
            for (property, value) in styles.declarations() {
                css.push_str(&format!("  --text-{name}-{property}: {value};\n"));
            }
        }

        css.push_str("}\n");
        Ok(css)
    }

    fn extension(&self) -> &'static str {
        "css"
    }

    fn mime_type(&self) -> &'static str {
        "text/css"
    }
}
