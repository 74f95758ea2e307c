//! Export for Typescale
//!
//! Two kinds of output:
//!
//! - [`css`] builds stylesheet text: `@font-face` rules, metric-adjusted
//!   fallback faces, preload hints and custom properties.
//! - [`TokenExporter`] implementations serialize a [`TokenSet`] into design
//!   token formats (`css-vars`, `tailwind`, `json`, `scss`, `figma`).

pub mod css;
pub mod css_vars;
pub mod error;
pub mod figma;
pub mod json;
pub mod scss;
pub mod tailwind;
pub mod tokens;

pub use css::{
    font_preload_links, generate_all_fonts_css, generate_fallback_font_face, generate_font_css,
    generate_font_face, generate_font_variables, generate_preload_links, generate_scale_variables,
    generate_selected_fonts_css, generate_single_font_css, generate_variant_classes,
    preload_links, PreloadLink,
};
pub use css_vars::CssVarsExporter;
pub use error::{ExportError, Result};
pub use figma::FigmaExporter;
pub use json::JsonExporter;
pub use scss::ScssExporter;
pub use tailwind::TailwindExporter;
pub use tokens::{exporter_for, FontToken, TokenExporter, TokenFormat, TokenSet};
