//! Errors raised by the loading manager

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Misuse of the manager. Fetch failures are not errors here; they land in
/// [`FontStatus::Failed`](crate::FontStatus::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Unknown font key: {0}")]
    UnknownFont(String),
}
