//! Validate command implementation

use std::process::ExitCode;

use typescale_core::{load_config, validate_config};

use crate::cli::ValidateArgs;
use crate::error::Result;

pub fn run(args: &ValidateArgs) -> Result<ExitCode> {
    let path = &args.config.config;
    let config = load_config(path)?;
    let report = validate_config(&config);

    for issue in &report.errors {
        println!("error: {issue}");
    }
    for issue in &report.warnings {
        println!("warning: {issue}");
    }

    let failed = !report.is_valid() || (args.strict && !report.warnings.is_empty());
    if failed {
        eprintln!("{}: {report}", path.display());
        Ok(ExitCode::FAILURE)
    } else {
        println!(
            "{}: valid ({} warning(s))",
            path.display(),
            report.warnings.len()
        );
        Ok(ExitCode::SUCCESS)
    }
}
