//! The font loading state machine
//!
//! All per-font state lives in one map behind one lock, paired with a
//! condition variable that is notified whenever a font settles. Fetches run
//! outside the lock; only the transition into `Loading` and the final
//! `Loaded`/`Failed` write for that key happen under it.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use log::{debug, info, warn};
use parking_lot::{Condvar, Mutex};
use rayon::prelude::*;

use typescale_core::{FontDefinition, FontMap, LoadingMode, TypographyConfig};
use typescale_export::{
    font_preload_links, generate_all_fonts_css, generate_font_css, preload_links,
};

use crate::error::{LoadError, Result};
use crate::sink::StyleSink;
use crate::source::{FontDescriptor, FontSource};
use crate::state::{FontStatus, LoadingSummary};

/// Style block id all font CSS is written under
pub const FONT_STYLE_ID: &str = "typescale-fonts";

/// Drives fonts from `Idle` to `Loaded` or `Failed`
///
/// In [`LoadingMode::Eager`] every configured font is tracked from the start
/// and [`start`](Self::start) injects all CSS and loads everything. In
/// [`LoadingMode::Lazy`] a font is tracked once it is requested or loaded,
/// and [`request_font`](Self::request_font) injects its CSS on first use.
pub struct FontLoadingManager {
    fonts: FontMap,
    source: Arc<dyn FontSource>,
    sink: Arc<dyn StyleSink>,
    mode: LoadingMode,
    preload: bool,
    states: Mutex<IndexMap<String, FontStatus>>,
    settled: Condvar,
    requested: Mutex<HashSet<String>>,
}

impl FontLoadingManager {
    pub fn new(
        fonts: FontMap,
        source: Arc<dyn FontSource>,
        sink: Arc<dyn StyleSink>,
        mode: LoadingMode,
    ) -> Self {
        let states = match mode {
            LoadingMode::Eager => fonts
                .keys()
                .map(|key| (key.clone(), FontStatus::Idle))
                .collect(),
            LoadingMode::Lazy => IndexMap::new(),
        };

        Self {
            fonts,
            source,
            sink,
            mode,
            preload: true,
            states: Mutex::new(states),
            settled: Condvar::new(),
            requested: Mutex::new(HashSet::new()),
        }
    }

    /// Fonts, loading mode and preload switch taken from a config
    pub fn from_config(
        config: &TypographyConfig,
        source: Arc<dyn FontSource>,
        sink: Arc<dyn StyleSink>,
    ) -> Self {
        Self::new(config.fonts.clone(), source, sink, config.optimization.loading)
            .with_preload(config.optimization.preload_critical)
    }

    /// Whether preload links are emitted for fonts marked `preload`
    pub fn with_preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    pub fn fonts(&self) -> &FontMap {
        &self.fonts
    }

    pub fn mode(&self) -> LoadingMode {
        self.mode
    }

    /// Inject CSS and load everything in eager mode; lazy mode defers to
    /// [`request_font`](Self::request_font)
    pub fn start(&self) -> LoadingSummary {
        match self.mode {
            LoadingMode::Eager => {
                self.sink
                    .replace_style(FONT_STYLE_ID, &generate_all_fonts_css(&self.fonts));
                if self.preload {
                    for link in preload_links(&self.fonts) {
                        self.sink.add_preload_link(&link);
                    }
                }
                self.load_all()
            },
            LoadingMode::Lazy => {
                debug!("Lazy loading: deferring {} fonts", self.fonts.len());
                self.summary()
            },
        }
    }

    /// Load one font and return its status afterwards
    ///
    /// A font already loading or loaded is left alone and its current status
    /// is returned; the in-flight load settles it. In lazy mode this counts
    /// as a request, so the font's CSS is injected first.
    pub fn load_font(&self, key: &str) -> Result<FontStatus> {
        let font = self.font(key)?;
        self.inject_on_first_request(key, font);
        {
            let mut states = self.states.lock();
            let status = states.entry(key.to_string()).or_default();
            match status {
                FontStatus::Loading | FontStatus::Loaded => return Ok(status.clone()),
                FontStatus::Idle | FontStatus::Failed(_) => *status = FontStatus::Loading,
            }
        }
        Ok(self.fetch_and_settle(key, font))
    }

    /// Load every configured font concurrently
    ///
    /// In lazy mode this requests every font, injecting each one's CSS.
    pub fn load_all(&self) -> LoadingSummary {
        let keys: Vec<&String> = self.fonts.keys().collect();
        keys.par_iter().for_each(|key| {
            if let Err(e) = self.load_font(key) {
                warn!("{e}");
            }
        });
        self.summary()
    }

    /// Force every tracked font not currently loading back to `Loading` and
    /// fetch them all again
    ///
    /// Eager mode tracks every configured font; lazy mode only those already
    /// requested, so a reload never starts loading a font nobody asked for.
    /// Fonts that were already loading are settled by their own in-flight
    /// load, so every tracked font ends `Loaded` or `Failed` once this
    /// returns and those loads finish.
    pub fn reload_fonts(&self) -> LoadingSummary {
        let claimed: Vec<(&String, &FontDefinition)> = {
            let mut states = self.states.lock();
            self.fonts
                .iter()
                .filter(|(key, _)| {
                    let status = match self.mode {
                        LoadingMode::Eager => states.entry(key.to_string()).or_default(),
                        LoadingMode::Lazy => match states.get_mut(key.as_str()) {
                            Some(status) => status,
                            None => return false,
                        },
                    };
                    if status.is_loading() {
                        false
                    } else {
                        *status = FontStatus::Loading;
                        true
                    }
                })
                .collect()
        };

        debug!("Reloading {} fonts", claimed.len());
        claimed.par_iter().for_each(|(key, font)| {
            self.fetch_and_settle(key, font);
        });
        self.summary()
    }

    /// Try a failed font again; any other status is returned unchanged
    pub fn retry_font(&self, key: &str) -> Result<FontStatus> {
        let font = self.font(key)?;
        {
            let mut states = self.states.lock();
            match states.get_mut(key) {
                Some(status) if status.is_failed() => *status = FontStatus::Loading,
                Some(status) => return Ok(status.clone()),
                None => return Ok(FontStatus::Idle),
            }
        }
        Ok(self.fetch_and_settle(key, font))
    }

    /// Ask for a font to be usable
    ///
    /// In lazy mode the first request for a key injects that font's CSS and
    /// preload links. Loading starts only if the font is not already loading
    /// or loaded.
    pub fn request_font(&self, key: &str) -> Result<FontStatus> {
        self.load_font(key)
    }

    /// Current status; untracked fonts report `Idle`
    pub fn state(&self, key: &str) -> Result<FontStatus> {
        self.font(key)?;
        Ok(self.states.lock().get(key).cloned().unwrap_or_default())
    }

    pub fn summary(&self) -> LoadingSummary {
        LoadingSummary::from_states(self.states.lock().iter())
    }

    /// Block until the font settles or the timeout passes
    ///
    /// `true` only when the font is loaded. A failed or unknown font returns
    /// `false` immediately. In-flight loads are not cancelled on timeout.
    pub fn wait_for_font(&self, key: &str, timeout: Duration) -> bool {
        if !self.fonts.contains_key(key) {
            return false;
        }
        let deadline = Instant::now() + timeout;
        let mut states = self.states.lock();
        loop {
            match states.get(key) {
                Some(FontStatus::Loaded) => return true,
                Some(FontStatus::Failed(_)) => return false,
                _ => {},
            }
            if self.settled.wait_until(&mut states, deadline).timed_out() {
                return states.get(key).is_some_and(FontStatus::is_loaded);
            }
        }
    }

    /// Block until layout is stable or the timeout passes; `true` when every
    /// tracked font loaded
    pub fn wait_for_all(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut states = self.states.lock();
        loop {
            let summary = LoadingSummary::from_states(states.iter());
            if summary.layout_stable {
                return summary.all_loaded;
            }
            if self.settled.wait_until(&mut states, deadline).timed_out() {
                return LoadingSummary::from_states(states.iter()).all_loaded;
            }
        }
    }

    fn font(&self, key: &str) -> Result<&FontDefinition> {
        self.fonts
            .get(key)
            .ok_or_else(|| LoadError::UnknownFont(key.to_string()))
    }

    /// Lazy mode only. The `requested` guard is held until the CSS is
    /// appended, so no caller can load a font before its faces exist.
    fn inject_on_first_request(&self, key: &str, font: &FontDefinition) {
        if self.mode != LoadingMode::Lazy {
            return;
        }
        let mut requested = self.requested.lock();
        if !requested.insert(key.to_string()) {
            return;
        }
        debug!("First request for '{key}', injecting CSS");
        self.sink.append_style(FONT_STYLE_ID, &generate_font_css(font));
        if self.preload && font.preload {
            for link in font_preload_links(font) {
                self.sink.add_preload_link(&link);
            }
        }
    }

    /// Fetch outside the lock, then write only this key's result
    fn fetch_and_settle(&self, key: &str, font: &FontDefinition) -> FontStatus {
        let descriptor = FontDescriptor::from_definition(key, font);
        let start = Instant::now();
        let outcome = if self.source.is_loaded(&descriptor) {
            Ok(())
        } else {
            self.source.load(&descriptor)
        };

        let status = match outcome {
            Ok(()) => {
                info!("Loaded '{}' ({key}) in {:?}", font.name, start.elapsed());
                FontStatus::Loaded
            },
            Err(failure) => {
                warn!("Font '{}' ({key}) failed, using fallback: {failure}", font.name);
                FontStatus::Failed(failure)
            },
        };

        self.states.lock().insert(key.to_string(), status.clone());
        self.settled.notify_all();
        status
    }
}

impl std::fmt::Debug for FontLoadingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLoadingManager")
            .field("fonts", &self.fonts.keys().collect::<Vec<_>>())
            .field("mode", &self.mode)
            .field("preload", &self.preload)
            .field("states", &*self.states.lock())
            .finish()
    }
}
