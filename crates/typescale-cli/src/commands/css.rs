//! CSS command implementation

use std::process::ExitCode;

use typescale_export::{
    generate_all_fonts_css, generate_font_variables, generate_preload_links,
    generate_scale_variables, generate_selected_fonts_css, generate_variant_classes,
};

use crate::cli::CssArgs;
use crate::commands::{load_context, with_trailing_newline, write_output};
use crate::error::Result;

pub fn run(args: &CssArgs) -> Result<ExitCode> {
    let context = load_context(&args.config.config, args.theme.as_deref())?;
    let fonts = context.fonts();

    let mut sections = Vec::new();
    if args.preload {
        let links = generate_preload_links(fonts);
        if !links.is_empty() {
            sections.push(links);
        }
    }

    let font_css = if args.fonts.is_empty() {
        generate_all_fonts_css(fonts)
    } else {
        generate_selected_fonts_css(fonts, args.fonts.as_slice())
    };
    sections.push(font_css);

    if args.variables {
        sections.push(generate_font_variables(fonts));
        sections.push(generate_scale_variables(context.scale()));
    }
    if args.classes {
        sections.push(generate_variant_classes(context.variants()));
    }

    let output = sections
        .into_iter()
        .filter(|section| !section.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    write_output(args.output.as_deref(), &with_trailing_newline(output))?;
    Ok(ExitCode::SUCCESS)
}
