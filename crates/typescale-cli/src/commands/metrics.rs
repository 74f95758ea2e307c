//! Metrics command implementation

use std::process::ExitCode;

use typescale_core::format::format_number;
use typescale_core::FontMetrics;
use typescale_fontdb::{get_metrics, system_fonts};

use crate::error::{CliError, Result};

pub fn run(args: &crate::cli::MetricsArgs) -> Result<ExitCode> {
    let metrics: Vec<FontMetrics> = match &args.name {
        Some(name) => {
            let found = get_metrics(name).ok_or_else(|| {
                CliError::InvalidArgument(format!(
                    "No metrics for '{name}'; run `typescale metrics` for the known fonts"
                ))
            })?;
            vec![found]
        },
        None => system_fonts().collect(),
    };

    if args.json {
        let text = match metrics.as_slice() {
            [single] if args.name.is_some() => serde_json::to_string_pretty(single)?,
            all => serde_json::to_string_pretty(all)?,
        };
        println!("{text}");
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:<18} {:>6} {:>7} {:>8} {:>8} {:>6} {:>6} {:>6}",
        "Family", "UPM", "Ascent", "Descent", "LineGap", "Cap", "xHgt", "Ratio"
    );
    for m in &metrics {
        println!(
            "{:<18} {:>6} {:>7} {:>8} {:>8} {:>6} {:>6} {:>6}",
            m.family_name,
            m.units_per_em,
            m.ascent,
            m.descent,
            m.line_gap,
            optional(m.cap_height),
            optional(m.x_height),
            format_number(m.line_height_ratio(), 3),
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn optional(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
