//! CLI Smoke Tests
//!
//! Run the built `typescale` binary against the fixture configs and check
//! exit codes and the shape of the output. Failure cases cover a missing
//! config, an invalid config and an unknown token format.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn typescale_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_typescale"))
}

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn temp_output(ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("typescale_test_{id}.{ext}"));
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(typescale_binary())
        .args(args)
        .env_remove("TYPESCALE_CONFIG")
        .env_remove("TYPESCALE_STRICT")
        .output()
        .expect("Failed to execute typescale")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn site() -> String {
    fixture("site.json").to_string_lossy().into_owned()
}

// ============================================================================
// Info, metrics, scale, fallback
// ============================================================================

#[test]
fn test_info_lists_formats_and_fonts() {
    let output = run(&["info"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Token formats"));
    assert!(text.contains("tailwind"));
    assert!(text.contains("Arial"));
    assert!(text.contains("major-third"));
}

#[test]
fn test_metrics_lookup_json() {
    let output = run(&["metrics", "arial", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["familyName"], "Arial");
    assert_eq!(value["unitsPerEm"], 2048);
}

#[test]
fn test_metrics_unknown_font_fails() {
    let output = run(&["metrics", "Nonexistent Sans"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nonexistent Sans"));
}

#[test]
fn test_scale_modular_json() {
    let output = run(&["scale", "--base", "16", "--ratio", "major-third", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "modular");
    assert_eq!(value["scale"]["base"], 16.0);
    assert_eq!(value["scale"]["lg"], 20.0);
}

#[test]
fn test_scale_range() {
    let output = run(&["scale", "--ratio", "2", "--steps-up", "2", "--steps-down", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().collect::<Vec<_>>(), ["8px", "16px", "32px", "64px"]);
}

#[test]
fn test_scale_fluid_emits_clamp() {
    let output = run(&["scale", "--type", "fluid", "--preview-at", "800"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("clamp("), "{text}");
    assert!(text.lines().any(|line| line.starts_with("base")));
}

#[test]
fn test_fallback_matches_known_adjustments() {
    let output = run(&[
        "fallback", "--font", "Inter", "--fallback", "Arial", "--ascent", "2728", "--descent",
        "-680", "--units-per-em", "2816", "--x-height", "1536", "--json",
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["adjustments"]["ascentOverride"], "96.90%");
    assert_eq!(value["adjustments"]["descentOverride"], "24.10%");
    assert_eq!(value["adjustments"]["sizeAdjust"], "105.01%");
    assert!(value["css"].as_str().unwrap().contains("src: local('Arial');"));
    assert_eq!(value["metricsSource"], "provided");
}

#[test]
fn test_fallback_picks_closest_system_font() {
    let output = run(&["fallback", "--font", "Verdana", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["font"], "Verdana");
    assert!(value["fallback"].is_string());
}

#[test]
fn test_fallback_from_flags() {
    let output = run(&[
        "fallback", "--font", "Brand", "--ascent", "900", "--descent", "-250", "--units-per-em",
        "1000",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let text = stdout(&output);
    assert!(text.contains("ascent-override:   90.00%"), "{text}");
    assert!(text.contains("font-family: 'Brand Fallback';"));
}

#[test]
fn test_fallback_unknown_font_uses_synthetic_metrics() {
    let output = run(&["fallback", "--font", "Mystery Grotesk", "--json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metricsSource"], "synthetic");
    assert!(value["css"]
        .as_str()
        .unwrap()
        .contains("font-family: 'Mystery Grotesk Fallback';"));

    let text = stdout(&run(&["fallback", "--font", "Mystery Grotesk"]));
    assert!(text.contains("synthetic metrics used"), "{text}");
}

// ============================================================================
// Config commands
// ============================================================================

#[test]
fn test_validate_valid_config() {
    let output = run(&["validate", &site()]);
    assert!(output.status.success(), "{}", stdout(&output));
    assert!(stdout(&output).contains("valid"));
}

#[test]
fn test_validate_invalid_config_exits_non_zero() {
    let output = run(&["validate", fixture("invalid.json").to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("files.450"));
}

#[test]
fn test_validate_missing_file() {
    let output = run(&["validate", "/nonexistent/typescale.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn test_config_from_environment() {
    let output = Command::new(typescale_binary())
        .args(["validate"])
        .env("TYPESCALE_CONFIG", site())
        .env_remove("TYPESCALE_STRICT")
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn test_css_selected_fonts_with_preload() {
    let output = run(&["css", &site(), "--fonts", "heading", "--preload", "--variables"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("<link rel=\"preload\" href=\"/fonts/inter-400.woff2\""));
    assert!(text.contains("font-family: 'Inter';"));
    assert!(text.contains("font-family: 'Inter Fallback';"));
    assert!(!text.contains("font-family: 'Roboto';"));
    assert!(text.contains("--font-size-base: 16px;"));
}

#[test]
fn test_css_to_file() {
    let output_file = temp_output("css");
    let output = run(&["css", &site(), "-o", output_file.to_str().unwrap()]);
    assert!(output.status.success());
    let css = fs::read_to_string(&output_file).unwrap();
    assert!(css.contains("font-display: optional;"));
    let _ = fs::remove_file(output_file);
}

#[test]
fn test_variants_with_theme() {
    let output = run(&["variants", &site(), "--theme", "compact"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["body"]["fontSize"], "11.67px");
    assert_eq!(value["h1"]["fontWeight"], "700");
}

#[test]
fn test_variants_unknown_theme_fails() {
    let output = run(&["variants", &site(), "--theme", "poster"]);
    assert!(!output.status.success());
}

#[test]
fn test_export_every_format() {
    for format in ["css-vars", "tailwind", "json", "scss", "figma"] {
        let output = run(&["export", &site(), "--format", format]);
        assert!(output.status.success(), "{format}");
        assert!(!stdout(&output).trim().is_empty(), "{format}");
    }
}

#[test]
fn test_export_unknown_format_fails() {
    let output = run(&["export", &site(), "--format", "yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("yaml"));
}
