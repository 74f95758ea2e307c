//! Variants command implementation

use std::process::ExitCode;

use crate::cli::VariantsArgs;
use crate::commands::load_context;
use crate::error::Result;

pub fn run(args: &VariantsArgs) -> Result<ExitCode> {
    let context = load_context(&args.config.config, args.theme.as_deref())?;
    println!("{}", serde_json::to_string_pretty(context.variants())?);
    for diagnostic in context.diagnostics().iter() {
        eprintln!("{diagnostic}");
    }
    Ok(ExitCode::SUCCESS)
}
