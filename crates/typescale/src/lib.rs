//! Typescale - typographic scales and metric-matched font fallbacks
//!
//! Typescale turns a declarative typography config into everything a web
//! page needs to render text without layout shift:
//! 1. A type scale (modular, fixed, fluid `clamp()` or custom)
//! 2. Resolved variant styles (`h1`, `body`, ...) over that scale
//! 3. `@font-face` rules plus metric-adjusted fallback faces
//! 4. Preload hints, custom properties and design tokens
//! 5. A font loading state machine that injects the CSS
//!
//! # Example
//!
//! ```
//! use typescale::prelude::*;
//!
//! let config = TypographyConfig::from_json_str(r#"{
//!     "scale": { "type": "modular", "base": 16, "ratio": 1.25 },
//!     "fonts": { "heading": { "name": "Inter", "files": { "700": "/inter-700.woff2" } } },
//!     "variants": { "h1": { "fontSize": "5xl", "fontWeight": 700, "fontFamily": "heading" } }
//! }"#)?;
//! let context = TypographyContext::new(config)?;
//!
//! let h1 = TextElement::builder(&context).variant("h1").build()?;
//! assert_eq!(h1.style["font-size"], "61.04px");
//!
//! let css = typescale::export::generate_all_fonts_css(context.fonts());
//! assert!(css.contains("font-family: 'Inter Fallback';"));
//! # Ok::<(), typescale::TypescaleError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `fontdb`: system font metrics and fallback adjustments
//! - `export`: CSS generation and token exporters (implies `fontdb`)
//! - `loader`: font loading manager (implies `export`)
//! - `full`: everything; the default

pub mod element;

pub use element::{TextElement, TextElementBuilder, TextTag};
pub use typescale_core::{
    config, diagnostics, error, format, scale, types, validate, variant, Computed, Diagnostics,
    Result, TypescaleError, TypographyConfig, TypographyContext,
};

#[cfg(feature = "fontdb")]
pub use typescale_fontdb as fontdb;

#[cfg(feature = "export")]
pub use typescale_export as export;

#[cfg(feature = "loader")]
pub use typescale_loader as loader;

/// Common imports for typical usage
pub mod prelude {
    pub use crate::element::{TextElement, TextTag};
    pub use typescale_core::{
        calculate_scale, load_config, resolve_all_variants, validate_config, Computed,
        ComputedVariantStyles, FontDefinition, FontMap, LoadingMode, Result, ScaleConfig,
        ScaleValue, TypescaleError, TypographyConfig, TypographyContext, VariantDefinition,
    };

    #[cfg(feature = "fontdb")]
    pub use typescale_fontdb::{calculate_fallback_adjustments, get_metrics, resolve_fallback};

    #[cfg(feature = "export")]
    pub use typescale_export::{exporter_for, TokenExporter, TokenFormat, TokenSet};

    #[cfg(feature = "loader")]
    pub use typescale_loader::{
        FontLoadingManager, FontSource, FontStatus, LoadingSummary, MemoryStyleSink, StyleSink,
    };
}
