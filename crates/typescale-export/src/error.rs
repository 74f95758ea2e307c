//! Errors raised while generating CSS or exporting tokens

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown font key: {0}")]
    UnknownFont(String),

    #[error("Unknown token format: {0} (expected one of: css-vars, tailwind, json, scss, figma)")]
    UnknownFormat(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
