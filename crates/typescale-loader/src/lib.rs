//! Font loading for Typescale
//!
//! [`FontLoadingManager`] tracks each configured font through
//! `Idle -> Loading -> Loaded | Failed`, fetching through a [`FontSource`]
//! and writing `@font-face` CSS and preload links into a [`StyleSink`].
//! Loads run in parallel; waiting is a condvar race against a timeout.
//!
//! ```
//! use std::sync::Arc;
//! use typescale_core::{FontDefinition, FontMap, LoadingMode};
//! use typescale_loader::{
//!     FontDescriptor, FontLoadingManager, FontSource, LoadFailure, MemoryStyleSink,
//! };
//!
//! struct AlwaysThere;
//!
//! impl FontSource for AlwaysThere {
//!     fn load(&self, _: &FontDescriptor) -> Result<(), LoadFailure> {
//!         Ok(())
//!     }
//! }
//!
//! let mut fonts = FontMap::new();
//! fonts.insert("body".into(), FontDefinition::new("Inter").with_file(400, "/inter.woff2"));
//!
//! let sink = Arc::new(MemoryStyleSink::new());
//! let manager =
//!     FontLoadingManager::new(fonts, Arc::new(AlwaysThere), sink.clone(), LoadingMode::Eager);
//! let summary = manager.start();
//! assert!(summary.all_loaded);
//! assert!(sink.to_html().contains("@font-face"));
//! ```

pub mod error;
pub mod manager;
pub mod sink;
pub mod source;
pub mod state;

pub use error::{LoadError, Result};
pub use manager::{FontLoadingManager, FONT_STYLE_ID};
pub use sink::{MemoryStyleSink, StyleSink};
pub use source::{FileSystemSource, FontDescriptor, FontSource, LoadFailure};
pub use state::{FontStatus, LoadingSummary};
