//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Typescale - typographic scales and metric-matched font fallbacks
#[derive(Parser, Debug)]
#[command(name = "typescale")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output (RUST_LOG still wins when set)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display information about scales, token formats and known fonts
    #[command(alias = "i")]
    Info,

    /// Look up vertical metrics for a system font, or list them all
    Metrics(MetricsArgs),

    /// Compute a type scale from the command line
    #[command(alias = "s")]
    Scale(ScaleArgs),

    /// Compute fallback @font-face overrides for a web font
    #[command(alias = "f")]
    Fallback(FallbackArgs),

    /// Check a typography config; exits non-zero on errors
    Validate(ValidateArgs),

    /// Generate @font-face CSS for a config
    Css(CssArgs),

    /// Print resolved variant styles as JSON
    Variants(VariantsArgs),

    /// Export design tokens
    Export(ExportArgs),
}

/// Path to a typography config (JSON or TOML)
#[derive(Args, Debug)]
pub struct ConfigArg {
    /// Config file; defaults to $TYPESCALE_CONFIG
    #[arg(env = "TYPESCALE_CONFIG")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Font family to look up (lists the whole table if omitted)
    pub name: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Modular,
    Fluid,
}

#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Scale type
    #[arg(short = 't', long = "type", value_enum, default_value = "modular")]
    pub kind: ScaleKind,

    /// Base size in pixels
    #[arg(short = 'b', long, default_value_t = 16.0)]
    pub base: f64,

    /// Step ratio: a number or a name such as "major-third"
    #[arg(short = 'r', long, default_value = "1.25")]
    pub ratio: String,

    /// Fluid ratio at the minimum viewport
    #[arg(long = "min-scale", default_value_t = 1.2)]
    pub min_scale: f64,

    /// Fluid ratio at the maximum viewport
    #[arg(long = "max-scale", default_value_t = 1.333)]
    pub max_scale: f64,

    /// Fluid minimum viewport width in pixels
    #[arg(long = "min-viewport", default_value_t = 320.0)]
    pub min_viewport: f64,

    /// Fluid maximum viewport width in pixels
    #[arg(long = "max-viewport", default_value_t = 1280.0)]
    pub max_viewport: f64,

    /// Print an ascending modular range with this many steps above base
    #[arg(long = "steps-up", requires = "steps_down")]
    pub steps_up: Option<u32>,

    /// Print an ascending modular range with this many steps below base
    #[arg(long = "steps-down", requires = "steps_up")]
    pub steps_down: Option<u32>,

    /// Also resolve fluid sizes at this viewport width
    #[arg(long = "preview-at")]
    pub preview_at: Option<f64>,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct FallbackArgs {
    /// Web font family; its metrics come from the table unless given below
    #[arg(long)]
    pub font: String,

    /// Local fallback font (best match from the table if omitted)
    #[arg(long)]
    pub fallback: Option<String>,

    #[arg(long, allow_hyphen_values = true, requires_all = ["descent", "units_per_em"])]
    pub ascent: Option<i32>,

    #[arg(long, allow_hyphen_values = true, requires_all = ["ascent", "units_per_em"])]
    pub descent: Option<i32>,

    #[arg(long = "line-gap", default_value_t = 0)]
    pub line_gap: i32,

    #[arg(long = "units-per-em", requires_all = ["ascent", "descent"])]
    pub units_per_em: Option<u16>,

    #[arg(long = "cap-height")]
    pub cap_height: Option<i32>,

    #[arg(long = "x-height")]
    pub x_height: Option<i32>,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Treat warnings as errors too
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct CssArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Only these font keys (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub fonts: Vec<String>,

    /// Include preload link tags
    #[arg(long)]
    pub preload: bool,

    /// Include custom properties for fonts and the scale
    #[arg(long)]
    pub variables: bool,

    /// Include one class per variant
    #[arg(long)]
    pub classes: bool,

    /// Apply a theme before generating
    #[arg(long)]
    pub theme: Option<String>,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VariantsArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Apply a theme before resolving
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Token format: css-vars, tailwind, json, scss, figma
    #[arg(short = 'F', long)]
    pub format: String,

    /// Apply a theme before exporting
    #[arg(long)]
    pub theme: Option<String>,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scale_range() {
        let cli = Cli::parse_from(["typescale", "scale", "--steps-up", "3", "--steps-down", "2"]);
        match cli.command {
            Commands::Scale(args) => {
                assert_eq!(args.kind, ScaleKind::Modular);
                assert_eq!((args.steps_up, args.steps_down), (Some(3), Some(2)));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_css_font_list_splits_on_commas() {
        let cli = Cli::parse_from(["typescale", "css", "site.json", "--fonts", "body,heading"]);
        match cli.command {
            Commands::Css(args) => {
                assert_eq!(args.fonts, ["body", "heading"]);
                assert_eq!(args.config.config, PathBuf::from("site.json"));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_negative_descent_is_a_value() {
        let cli = Cli::parse_from([
            "typescale", "fallback", "--font", "Brand", "--ascent", "900", "--descent", "-250",
            "--units-per-em", "1000",
        ]);
        match cli.command {
            Commands::Fallback(args) => assert_eq!(args.descent, Some(-250)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
