//! Where generated CSS and preload hints go

use indexmap::IndexMap;
use parking_lot::Mutex;
use typescale_export::PreloadLink;

/// A document-wide style target.
///
/// Every call must be atomic with respect to the others; appends from
/// several threads must never lose text.
pub trait StyleSink: Send + Sync {
    /// Create or overwrite the named style block
    fn replace_style(&self, id: &str, css: &str);

    /// Append to the named style block, creating it if needed
    fn append_style(&self, id: &str, css: &str);

    /// Add a preload hint unless one with the same href exists; true if added
    fn add_preload_link(&self, link: &PreloadLink) -> bool;
}

#[derive(Debug, Default)]
struct SinkState {
    styles: IndexMap<String, String>,
    links: Vec<PreloadLink>,
}

/// In-memory [`StyleSink`], for servers that render the head themselves
#[derive(Debug, Default)]
pub struct MemoryStyleSink {
    state: Mutex<SinkState>,
}

impl MemoryStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, id: &str) -> Option<String> {
        self.state.lock().styles.get(id).cloned()
    }

    pub fn style_ids(&self) -> Vec<String> {
        self.state.lock().styles.keys().cloned().collect()
    }

    pub fn preload_links(&self) -> Vec<PreloadLink> {
        self.state.lock().links.clone()
    }

    /// Preload links followed by `<style>` blocks, ready for a document head
    pub fn to_html(&self) -> String {
        let state = self.state.lock();
        let mut html: Vec<String> = state.links.iter().map(PreloadLink::to_html).collect();
        for (id, css) in &state.styles {
            html.push(format!("<style id=\"{id}\">\n{css}</style>"));
        }
        html.join("\n")
    }
}

impl StyleSink for MemoryStyleSink {
    fn replace_style(&self, id: &str, css: &str) {
        self.state.lock().styles.insert(id.to_string(), css.to_string());
    }

    fn append_style(&self, id: &str, css: &str) {
        let mut state = self.state.lock();
        let block = state.styles.entry(id.to_string()).or_default();
        if !block.is_empty() && !block.ends_with('\n') {
            block.push('\n');
        }
        block.push_str(css);
    }

    fn add_preload_link(&self, link: &PreloadLink) -> bool {
        let mut state = self.state.lock();
        if state.links.iter().any(|existing| existing.href == link.href) {
            return false;
        }
        state.links.push(link.clone());
        true
    }
}
