//! Error types for Typescale
//!
//! Only configuration loading and strict validation fail with an error.
//! Computation paths degrade instead and report through [`crate::diagnostics`].

use thiserror::Error;

use crate::validate::ValidationReport;

pub type Result<T> = std::result::Result<T, TypescaleError>;

/// Main error type for Typescale
#[derive(Debug, Error)]
pub enum TypescaleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(ValidationReport),

    #[error("Unknown font: {0}")]
    UnknownFont(String),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
