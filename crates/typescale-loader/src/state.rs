//! Per-font load state and the summary derived from it

use crate::source::LoadFailure;

/// Where one font is in its lifecycle.
///
/// `Idle -> Loading -> Loaded | Failed`. Settled fonts only go back to
/// `Loading` through a reload or retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(LoadFailure),
}

impl FontStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Loaded or failed
    pub fn is_settled(&self) -> bool {
        self.is_loaded() || self.is_failed()
    }

    pub fn error(&self) -> Option<&LoadFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Aggregate view over every tracked font
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingSummary {
    pub total: usize,
    pub loaded_fonts: Vec<String>,
    pub loading_fonts: Vec<String>,
    pub failed_fonts: Vec<String>,
    /// Every tracked font loaded and nothing in flight
    pub all_loaded: bool,
    /// Nothing in flight and every font settled. A failed font counts: its
    /// fallback face is final.
    pub layout_stable: bool,
}

impl LoadingSummary {
    pub fn from_states<'a>(states: impl IntoIterator<Item = (&'a String, &'a FontStatus)>) -> Self {
        let mut summary = Self::default();
        for (key, status) in states {
            summary.total += 1;
            match status {
                FontStatus::Loaded => summary.loaded_fonts.push(key.clone()),
                FontStatus::Loading => summary.loading_fonts.push(key.clone()),
                FontStatus::Failed(_) => summary.failed_fonts.push(key.clone()),
                FontStatus::Idle => {},
            }
        }

        let loaded = summary.loaded_fonts.len();
        let loading = summary.loading_fonts.len();
        let failed = summary.failed_fonts.len();
        summary.all_loaded = loading == 0 && loaded == summary.total;
        summary.layout_stable = loading == 0 && loaded + failed == summary.total;
        summary
    }
}
