//! Info command implementation
//!
//! Lists what this build knows about: scale types, named ratios, token
//! formats and the system font metrics table.

use std::process::ExitCode;

use typescale_core::scale::NAMED_RATIOS;
use typescale_export::TokenFormat;
use typescale_fontdb::system_font_names;

use crate::error::Result;

pub fn run() -> Result<ExitCode> {
    println!("Typescale v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Scale types:");
    println!("  modular           - base * ratio^n per named step");
    println!("  fluid             - clamp() between two viewport widths");
    println!("  fixed             - explicit sizes per step");
    println!("  custom            - arbitrary keys passed through");
    println!();

    println!("Named ratios:");
    for (name, ratio) in NAMED_RATIOS {
        println!("  {name:<17} - {ratio}");
    }
    println!();

    println!("Token formats:");
    for format in TokenFormat::ALL {
        println!("  {format}");
    }
    println!();

    println!("System fonts with known metrics:");
    for name in system_font_names() {
        println!("  {name}");
    }

    Ok(ExitCode::SUCCESS)
}
