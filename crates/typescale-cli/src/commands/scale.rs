//! Scale command implementation
//!
//! Builds a [`ScaleConfig`] from flags and prints the computed steps, or a
//! raw modular range when `--steps-up/--steps-down` are given.

use std::process::ExitCode;

use serde_json::json;
use typescale_core::format::format_px;
use typescale_core::scale::{named_ratio, preview_fluid_scale};
use typescale_core::{
    calculate_modular_scale_range, calculate_scale, FluidScale, ModularScale, ScaleConfig,
};

use crate::cli::{ScaleArgs, ScaleKind};
use crate::error::{CliError, Result};

pub fn run(args: &ScaleArgs) -> Result<ExitCode> {
    let ratio = parse_ratio(&args.ratio)?;

    if let (Some(steps_up), Some(steps_down)) = (args.steps_up, args.steps_down) {
        let range = calculate_modular_scale_range(args.base, ratio, steps_up, steps_down);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&range)?);
        } else {
            for value in range {
                println!("{}", format_px(value));
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = match args.kind {
        ScaleKind::Modular => ScaleConfig::Modular(ModularScale {
            base: args.base,
            ratio,
        }),
        ScaleKind::Fluid => ScaleConfig::Fluid(FluidScale {
            base: args.base,
            min_scale: args.min_scale,
            max_scale: args.max_scale,
            min_viewport: args.min_viewport,
            max_viewport: args.max_viewport,
        }),
    };

    let (scale, diagnostics) = calculate_scale(&config).into_parts();
    let preview = match (&config, args.preview_at) {
        (ScaleConfig::Fluid(fluid), Some(viewport)) => Some(preview_fluid_scale(fluid, viewport)),
        _ => None,
    };

    if args.json {
        let mut output = json!({ "type": config.kind(), "scale": scale });
        if let Some(preview) = &preview {
            output["preview"] = json!(preview);
        }
        if !diagnostics.is_empty() {
            output["diagnostics"] = json!(diagnostics);
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    for (name, value) in &scale {
        match preview.as_ref().and_then(|p| p.get(name)) {
            Some(px) => println!("{name:<6} {value}  ({})", format_px(*px)),
            None => println!("{name:<6} {value}"),
        }
    }
    for diagnostic in diagnostics.iter() {
        eprintln!("{diagnostic}");
    }
    Ok(ExitCode::SUCCESS)
}

/// A number, or a name from the named-ratio table
fn parse_ratio(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .or_else(|| named_ratio(text))
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "Invalid ratio '{text}': expected a number or a name like 'major-third'"
            ))
        })
}
