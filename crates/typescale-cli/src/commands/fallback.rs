//! Fallback command implementation

use std::process::ExitCode;

use serde_json::json;
use typescale_core::format::format_number;
use typescale_core::{AdjustmentOverrides, FontMetrics};
use typescale_export::generate_fallback_font_face;
use typescale_fontdb::{
    calculate_fallback_adjustments, estimate_cls_improvement, find_best_matching_fallback,
    get_metrics, metrics_or_default, validate_adjustments, MetricsSource, ResolvedFallback,
};

use crate::cli::FallbackArgs;
use crate::error::{CliError, Result};

pub fn run(args: &FallbackArgs) -> Result<ExitCode> {
    let (metrics, metrics_source) = font_metrics(args)?;
    let fallback = match &args.fallback {
        Some(name) => name.clone(),
        None => find_best_matching_fallback(&metrics).to_string(),
    };

    let adjustments = calculate_fallback_adjustments(&metrics, &fallback);
    let warnings = validate_adjustments(&adjustments);
    let cls = estimate_cls_improvement(&metrics, &fallback);
    let resolved = ResolvedFallback {
        family: format!("{} Fallback", args.font),
        local_font: fallback.clone(),
        metrics_source,
        descriptors: AdjustmentOverrides {
            ascent_override: Some(adjustments.ascent_override.clone()),
            descent_override: Some(adjustments.descent_override.clone()),
            line_gap_override: Some(adjustments.line_gap_override.clone()),
            size_adjust: Some(adjustments.size_adjust.clone()),
        },
    };
    let css = generate_fallback_font_face(&resolved);

    if args.json {
        let output = json!({
            "font": args.font,
            "fallback": fallback,
            "metricsSource": metrics_source,
            "adjustments": adjustments,
            "warnings": warnings,
            "cls": {
                "before": cls.before,
                "after": cls.after,
                "improvementPercent": cls.improvement_percent(),
            },
            "css": css,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Font:      {}", args.font);
    if metrics_source == MetricsSource::Synthetic {
        println!("           (not in the metrics table; synthetic metrics used)");
    }
    println!("Fallback:  {fallback}");
    if get_metrics(&fallback).is_none() {
        println!("           (not in the metrics table; synthetic metrics used)");
    }
    println!();
    println!("ascent-override:   {}", adjustments.ascent_override);
    println!("descent-override:  {}", adjustments.descent_override);
    println!("line-gap-override: {}", adjustments.line_gap_override);
    println!("size-adjust:       {}", adjustments.size_adjust);
    println!();
    println!(
        "Estimated CLS: {} -> {} ({}% less)",
        format_number(cls.before, 4),
        format_number(cls.after, 4),
        format_number(cls.improvement_percent(), 1)
    );
    for warning in &warnings {
        println!("warning: {warning}");
    }
    println!();
    print!("{css}");
    Ok(ExitCode::SUCCESS)
}

/// Metrics from flags when given, else from the table, else synthetic
fn font_metrics(args: &FallbackArgs) -> Result<(FontMetrics, MetricsSource)> {
    if let (Some(ascent), Some(descent), Some(units_per_em)) =
        (args.ascent, args.descent, args.units_per_em)
    {
        if units_per_em == 0 {
            return Err(CliError::InvalidArgument(
                "--units-per-em must be positive".into(),
            ));
        }
        let mut metrics = FontMetrics::new(&args.font, ascent, descent, args.line_gap, units_per_em);
        metrics.cap_height = args.cap_height;
        metrics.x_height = args.x_height;
        return Ok((metrics, MetricsSource::Provided));
    }

    let source = if get_metrics(&args.font).is_some() {
        MetricsSource::Table
    } else {
        MetricsSource::Synthetic
    };
    Ok((metrics_or_default(&args.font), source))
}
