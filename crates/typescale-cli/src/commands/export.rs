//! Export command implementation

use std::process::ExitCode;

use typescale_export::{exporter_for, TokenFormat, TokenSet};

use crate::cli::ExportArgs;
use crate::commands::{load_context, with_trailing_newline, write_output};
use crate::error::Result;

pub fn run(args: &ExportArgs) -> Result<ExitCode> {
    let format: TokenFormat = args.format.parse()?;
    let context = load_context(&args.config.config, args.theme.as_deref())?;

    let exporter = exporter_for(format);
    let tokens = TokenSet::from_context(&context);
    let output = exporter.export(&tokens)?;
    log::debug!(
        "Exported {} tokens as {} ({})",
        tokens.fonts.len() + tokens.scale.len() + tokens.variants.len(),
        exporter.name(),
        exporter.mime_type()
    );

    write_output(args.output.as_deref(), &with_trailing_newline(output))?;
    Ok(ExitCode::SUCCESS)
}
