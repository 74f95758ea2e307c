//! Schema-level validation of a [`TypographyConfig`]
//!
//! Collects every problem instead of stopping at the first. Errors are
//! structural violations; warnings are probable mistakes that computation
//! would tolerate.

use std::fmt;

use serde::Serialize;

use crate::config::TypographyConfig;
use crate::error::{Result, TypescaleError};
use crate::scale::scale_keys;
use crate::types::{
    parse_weight, CssValue, FontDefinition, FontMap, FontSizeRef, ScaleConfig, ScaleValue,
    VariantMap,
};
use crate::variant::letter_spacing_preset;

/// Font file extensions browsers can load
const FONT_EXTENSIONS: [&str; 5] = ["woff2", "woff", "ttf", "otf", "eot"];

const CSS_LENGTH_UNITS: [&str; 9] = ["rem", "em", "px", "%", "ch", "ex", "vw", "vh", "pt"];

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ConfigIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
            suggestion: None,
        }
    }

    fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (hint: {suggestion})")?;
        }
        Ok(())
    }
}

/// Everything validation found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ConfigIssue>,
    pub warnings: Vec<ConfigIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, issue: ConfigIssue) {
        self.errors.push(issue);
    }

    fn warning(&mut self, issue: ConfigIssue) {
        self.warnings.push(issue);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s), {} warning(s)",
            self.errors.len(),
            self.warnings.len()
        )?;
        if let Some(first) = self.errors.first() {
            write!(f, "; first: {first}")?;
        }
        Ok(())
    }
}

/// Validate and collect every issue
pub fn validate_config(config: &TypographyConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_fonts(&config.fonts, &mut report);
    validate_scale(config.scale.as_ref(), "scale", &mut report);
    validate_variants(
        &config.variants,
        &config.fonts,
        config.scale.as_ref(),
        "variants",
        &mut report,
    );

    for key in config.licenses.keys() {
        if !config.fonts.contains_key(key) {
            report.warning(ConfigIssue::new(
                format!("licenses.{key}"),
                format!("License entry for unknown font '{key}'"),
            ));
        }
    }

    for (name, theme) in &config.themes {
        let prefix = format!("themes.{name}");
        if let Some(scale) = &theme.scale {
            validate_scale(Some(scale), &format!("{prefix}.scale"), &mut report);
        }
        let scale = theme.scale.as_ref().or(config.scale.as_ref());
        validate_variants(
            &theme.variants,
            &config.fonts,
            scale,
            &format!("{prefix}.variants"),
            &mut report,
        );
    }

    log::debug!("Validation finished: {report}");
    report
}

/// Validate and fail when any error was found
pub fn validate_config_strict(config: &TypographyConfig) -> Result<ValidationReport> {
    let report = validate_config(config);
    if report.is_valid() {
        Ok(report)
    } else {
        Err(TypescaleError::InvalidConfig(report))
    }
}

fn validate_fonts(fonts: &FontMap, report: &mut ValidationReport) {
    for (key, font) in fonts {
        validate_font(&format!("fonts.{key}"), font, report);
    }
}

fn validate_font(prefix: &str, font: &FontDefinition, report: &mut ValidationReport) {
    if font.name.trim().is_empty() {
        report.error(ConfigIssue::new(
            format!("{prefix}.name"),
            "Font name is required",
        ));
    }

    if font.files.is_empty() {
        report.error(
            ConfigIssue::new(format!("{prefix}.files"), "At least one font file is required")
                .suggest("add e.g. \"400\": \"/fonts/regular.woff2\""),
        );
    }

    for (weight, path) in &font.files {
        let file_path = format!("{prefix}.files.{weight}");
        if parse_weight(weight).is_none() {
            report.error(
                ConfigIssue::new(&file_path, format!("Invalid font weight '{weight}'"))
                    .suggest("use a multiple of 100 between 100 and 900"),
            );
        }
        if path.trim().is_empty() {
            report.error(ConfigIssue::new(&file_path, "Font file path is empty"));
        } else if !has_font_extension(path) {
            report.warning(
                ConfigIssue::new(&file_path, format!("Unrecognised font file type '{path}'"))
                    .suggest("prefer .woff2"),
            );
        }
    }

    if let Some(variable) = &font.variable {
        if !variable.starts_with("--") {
            report.warning(
                ConfigIssue::new(
                    format!("{prefix}.variable"),
                    format!("CSS variable '{variable}' does not start with '--'"),
                )
                .suggest(format!("--{}", variable.trim_start_matches('-'))),
            );
        }
    }

    if let Some(overrides) = font.fallback.as_ref().and_then(|f| f.overrides.as_ref()) {
        let fields = [
            ("ascentOverride", &overrides.ascent_override),
            ("descentOverride", &overrides.descent_override),
            ("lineGapOverride", &overrides.line_gap_override),
            ("sizeAdjust", &overrides.size_adjust),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if crate::format::parse_percent(value).is_none() {
                    report.error(
                        ConfigIssue::new(
                            format!("{prefix}.fallback.overrides.{field}"),
                            format!("'{value}' is not a percentage"),
                        )
                        .suggest("e.g. \"95%\""),
                    );
                }
            }
        }
    }
}

fn has_font_extension(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    let lower = lower.split(['?', '#']).next().unwrap_or_default();
    FONT_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

fn require_positive(value: f64, path: String, label: &str, report: &mut ValidationReport) {
    if !(value.is_finite() && value > 0.0) {
        report.error(ConfigIssue::new(
            path,
            format!("{label} must be greater than 0, got {value}"),
        ));
    }
}

fn validate_scale(scale: Option<&ScaleConfig>, prefix: &str, report: &mut ValidationReport) {
    let Some(scale) = scale else {
        report.warning(
            ConfigIssue::new(prefix, "No scale configured; the default scale is used")
                .suggest("{ \"type\": \"modular\", \"base\": 16, \"ratio\": 1.25 }"),
        );
        return;
    };

    match scale {
        ScaleConfig::Modular(modular) => {
            require_positive(modular.base, format!("{prefix}.base"), "Base", report);
            require_positive(modular.ratio, format!("{prefix}.ratio"), "Ratio", report);
            if modular.ratio == 1.0 {
                report.warning(
                    ConfigIssue::new(format!("{prefix}.ratio"), "A ratio of 1 makes every step equal")
                        .suggest("1.25 (major third)"),
                );
            }
        },
        ScaleConfig::Fixed(fixed) => {
            if fixed.values.is_empty() {
                report.error(ConfigIssue::new(
                    format!("{prefix}.values"),
                    "Fixed scale has no values",
                ));
            }
            for (key, value) in &fixed.values {
                let path = format!("{prefix}.values.{key}");
                match value {
                    ScaleValue::Px(px) => require_positive(*px, path, "Size", report),
                    ScaleValue::Css(text) => report.error(ConfigIssue::new(
                        path,
                        format!("Fixed scale values must be numbers, got '{text}'"),
                    )),
                    ScaleValue::Invalid(value) => report.error(ConfigIssue::new(
                        path,
                        format!("Fixed scale values must be numbers, got {value}"),
                    )),
                }
            }
        },
        ScaleConfig::Fluid(fluid) => {
            require_positive(fluid.base, format!("{prefix}.base"), "Base", report);
            require_positive(fluid.min_scale, format!("{prefix}.minScale"), "minScale", report);
            require_positive(fluid.max_scale, format!("{prefix}.maxScale"), "maxScale", report);
            require_positive(
                fluid.min_viewport,
                format!("{prefix}.minViewport"),
                "minViewport",
                report,
            );
            require_positive(
                fluid.max_viewport,
                format!("{prefix}.maxViewport"),
                "maxViewport",
                report,
            );
            if fluid.min_viewport >= fluid.max_viewport {
                report.error(ConfigIssue::new(
                    format!("{prefix}.minViewport"),
                    format!(
                        "minViewport ({}) must be less than maxViewport ({})",
                        fluid.min_viewport, fluid.max_viewport
                    ),
                ));
            }
            if fluid.min_scale > fluid.max_scale {
                report.warning(ConfigIssue::new(
                    format!("{prefix}.minScale"),
                    "minScale is larger than maxScale; sizes shrink as the viewport grows",
                ));
            }
        },
        ScaleConfig::Custom(_) => {},
        ScaleConfig::Unknown => report.error(
            ConfigIssue::new(format!("{prefix}.type"), "Unknown or missing scale type")
                .suggest("one of: modular, fixed, fluid, custom"),
        ),
    }
}

/// `0`, a number with a known unit, a keyword, or a function
fn is_css_length(value: &str) -> bool {
    let value = value.trim();
    if value == "0" || value == "normal" || value.starts_with("var(") || value.starts_with("calc(")
    {
        return true;
    }
    CSS_LENGTH_UNITS.iter().any(|unit| {
        value
            .strip_suffix(unit)
            .is_some_and(|number| number.parse::<f64>().is_ok())
    })
}

fn validate_variants(
    variants: &VariantMap,
    fonts: &FontMap,
    scale: Option<&ScaleConfig>,
    prefix: &str,
    report: &mut ValidationReport,
) {
    let keys = scale_keys(scale);

    for (name, variant) in variants {
        let variant_path = format!("{prefix}.{name}");

        match &variant.font_size {
            FontSizeRef::Px(px) => {
                require_positive(*px, format!("{variant_path}.fontSize"), "Font size", report)
            },
            FontSizeRef::Key(key) => {
                let numeric = key.trim().parse::<f64>().is_ok();
                if !numeric && !keys.iter().any(|k| k == key) {
                    report.warning(
                        ConfigIssue::new(
                            format!("{variant_path}.fontSize"),
                            format!("'{key}' is not a step of the configured scale"),
                        )
                        .suggest(format!("one of: {}", keys.join(", "))),
                    );
                }
            },
        }

        if let Some(CssValue::Number(weight)) = &variant.font_weight {
            if !(1.0..=1000.0).contains(weight) {
                report.error(ConfigIssue::new(
                    format!("{variant_path}.fontWeight"),
                    format!("Font weight must be between 1 and 1000, got {weight}"),
                ));
            }
        }

        if let Some(family) = &variant.font_family {
            if !fonts.contains_key(family) {
                let known: Vec<&str> = fonts.keys().map(String::as_str).collect();
                report.error(
                    ConfigIssue::new(
                        format!("{variant_path}.fontFamily"),
                        format!("Unknown font '{family}'"),
                    )
                    .suggest(format!("one of: {}", known.join(", "))),
                );
            }
        }

        if let Some(spacing) = &variant.letter_spacing {
            if letter_spacing_preset(spacing).is_none() && !is_css_length(spacing) {
                report.warning(
                    ConfigIssue::new(
                        format!("{variant_path}.letterSpacing"),
                        format!("'{spacing}' is neither a preset nor a CSS length"),
                    )
                    .suggest("tighter, tight, normal, wide, wider, widest"),
                );
            }
        }
    }
}
