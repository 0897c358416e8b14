//! Bounded ribbon of recently visited URLs for the homepage sidebar.
//!
//! UI-local display state, never persisted — distinct from the durable
//! history store owned by the host. Holds at most 10 URLs, most recent
//! first, suppressing only adjacent duplicates: revisiting the current page
//! does not add a row, but an A → B → A sequence keeps both A entries' slots.

/// Maximum number of URLs shown in the ribbon.
pub const RIBBON_CAPACITY: usize = 10;

/// Fixed-capacity most-recent-first URL ribbon.
#[derive(Debug, Default)]
pub struct RecentRibbon {
    urls: Vec<String>,
}

impl RecentRibbon {
    pub fn new() -> Self {
        Self { urls: Vec::new() }
    }

    /// Pushes a visited URL to the front. Returns false if the URL equals the
    /// current front entry (adjacent duplicate, suppressed).
    pub fn push(&mut self, url: &str) -> bool {
        if self.urls.first().map(|front| front == url).unwrap_or(false) {
            return false;
        }
        self.urls.insert(0, url.to_string());
        self.urls.truncate(RIBBON_CAPACITY);
        true
    }

    /// The ribbon contents, most recent first.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
