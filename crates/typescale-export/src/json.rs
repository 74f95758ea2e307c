//! JSON token export

use crate::error::{ExportError, Result};
use crate::tokens::{TokenExporter, TokenSet};

/// The token set as JSON, keys in declaration order
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty_print() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenExporter for JsonExporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, tokens: &TokenSet) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(tokens)
        } else {
            serde_json::to_string(tokens)
        }
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::sample_tokens;

    #[test]
    fn test_json_export_structure() {
        let json = JsonExporter::new().export(&sample_tokens()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["fonts"]["heading"]["family"], "Inter");
        assert_eq!(value["fonts"]["heading"]["weights"][1], 700);
        assert_eq!(value["scale"]["xl"], 25.0);
        assert_eq!(value["scale"]["fluid"], "clamp(1rem, 2vw, 2rem)");
        assert_eq!(value["variants"]["h1"]["fontSize"], "61.04px");
        assert_eq!(value["variants"]["h1"]["lineHeight"], "1.1");
        assert!(value["variants"]["body"].get("fontWeight").is_none());
    }

    #[test]
    fn test_json_keeps_scale_order() {
        let json = JsonExporter::new().export(&sample_tokens()).unwrap();
        let xs = json.find("\"xs\"").unwrap();
        let six = json.find("\"6xl\"").unwrap();
        assert!(xs < six);
    }

    #[test]
    fn test_pretty_print() {
        let exporter = JsonExporter::with_pretty_print();
        let json = exporter.export(&sample_tokens()).unwrap();
        assert!(json.contains("\n  \"fonts\": {"));
        assert_eq!(exporter.extension(), "json");
        assert_eq!(exporter.mime_type(), "application/json");
    }
}
