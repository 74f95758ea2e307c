//! Where font bytes come from

use std::path::PathBuf;

use thiserror::Error;
use typescale_core::{FontDefinition, FontStyle};

/// Why a single font failed to load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("Font source unavailable")]
    Unavailable,

    #[error("Failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("Font '{0}' has no loadable files")]
    NoFiles(String),

    #[error("{0}")]
    Other(String),
}

/// What a source is asked to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    pub key: String,
    pub family: String,
    pub style: FontStyle,
    /// `(weight, path)` sorted by weight
    pub files: Vec<(u16, String)>,
}

impl FontDescriptor {
    pub fn from_definition(key: &str, font: &FontDefinition) -> Self {
        Self {
            key: key.to_string(),
            family: font.name.clone(),
            style: font.font_style(),
            files: font
                .weighted_files()
                .into_iter()
                .map(|(weight, path)| (weight, path.to_string()))
                .collect(),
        }
    }
}

/// Fetches fonts. Implementations are called from several threads at once.
pub trait FontSource: Send + Sync {
    /// Fetch every file of the font; blocks until done
    fn load(&self, descriptor: &FontDescriptor) -> Result<(), LoadFailure>;

    /// Whether the font is already available without loading
    fn is_loaded(&self, _descriptor: &FontDescriptor) -> bool {
        false
    }
}

/// Resolves font paths against a directory and checks the files exist
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl FontSource for FileSystemSource {
    fn load(&self, descriptor: &FontDescriptor) -> Result<(), LoadFailure> {
        if descriptor.files.is_empty() {
            return Err(LoadFailure::NoFiles(descriptor.family.clone()));
        }
        for (_, path) in &descriptor.files {
            let resolved = self.resolve(path);
            let metadata = std::fs::metadata(&resolved).map_err(|e| LoadFailure::Fetch {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            if !metadata.is_file() {
                return Err(LoadFailure::Fetch {
                    path: path.clone(),
                    reason: "not a file".into(),
                });
            }
        }
        Ok(())
    }
}
