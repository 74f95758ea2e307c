//! One module per subcommand

pub mod css;
pub mod export;
pub mod fallback;
pub mod info;
pub mod metrics;
pub mod scale;
pub mod validate;
pub mod variants;

use std::fs;
use std::path::Path;

use typescale_core::TypographyContext;

use crate::error::Result;

/// Load a config, optionally switching to one of its themes
pub(crate) fn load_context(path: &Path, theme: Option<&str>) -> Result<TypographyContext> {
    log::debug!("Loading config from {}", path.display());
    let context = TypographyContext::from_path(path)?;
    match theme {
        Some(name) => Ok(context.with_theme(name)?),
        None => Ok(context),
    }
}

/// Write to a file, or stdout when no path is given
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Wrote {}", path.display());
        },
        None => print!("{content}"),
    }
    Ok(())
}

/// Ensure text ends with exactly one newline
pub(crate) fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
