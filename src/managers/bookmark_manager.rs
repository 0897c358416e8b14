//! Bookmark Manager for Anechoic.
//!
//! Implements `BookmarkManagerTrait` — a user-curated list of saved URLs in
//! the JSON-backed store, unique by URL, most recent first, never auto-pruned.

use std::sync::Arc;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::storage::{JsonStore, StoreName};
use crate::types::bookmark::{BookmarkEntry, FALLBACK_BOOKMARK_TITLE};
use crate::types::errors::BookmarkError;

/// Trait defining bookmark operations.
pub trait BookmarkManagerTrait {
    /// Adds a bookmark. Fails with `DuplicateUrl` if the URL is already saved
    /// and `MissingUrl` if `url` is empty. Returns the resulting full list.
    fn add(&self, title: Option<&str>, url: &str) -> Result<Vec<BookmarkEntry>, BookmarkError>;
    /// Removes every bookmark matching `url`. Removing an absent URL is a
    /// success no-op. Returns the resulting full list.
    fn remove(&self, url: &str) -> Result<Vec<BookmarkEntry>, BookmarkError>;
    /// Returns the persisted bookmark list.
    fn list(&self) -> Vec<BookmarkEntry>;
}

/// Bookmark manager backed by the JSON store.
pub struct BookmarkManager {
    store: Arc<JsonStore>,
}

impl BookmarkManager {
    /// Creates a new `BookmarkManager` writing through the given store.
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    fn now_iso() -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default()
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add(&self, title: Option<&str>, url: &str) -> Result<Vec<BookmarkEntry>, BookmarkError> {
        if url.is_empty() {
            return Err(BookmarkError::MissingUrl);
        }

        let mut bookmarks: Vec<BookmarkEntry> = self.store.read(StoreName::Bookmarks);
        if bookmarks.iter().any(|b| b.url == url) {
            return Err(BookmarkError::DuplicateUrl(url.to_string()));
        }

        bookmarks.insert(
            0,
            BookmarkEntry {
                title: title
                    .filter(|t| !t.is_empty())
                    .unwrap_or(FALLBACK_BOOKMARK_TITLE)
                    .to_string(),
                url: url.to_string(),
                added_at: Self::now_iso(),
            },
        );

        self.store
            .write(StoreName::Bookmarks, &bookmarks)
            .map_err(|e| BookmarkError::Store(e.to_string()))?;
        Ok(bookmarks)
    }

    fn remove(&self, url: &str) -> Result<Vec<BookmarkEntry>, BookmarkError> {
        if url.is_empty() {
            return Err(BookmarkError::MissingUrl);
        }

        let mut bookmarks: Vec<BookmarkEntry> = self.store.read(StoreName::Bookmarks);
        bookmarks.retain(|b| b.url != url);

        self.store
            .write(StoreName::Bookmarks, &bookmarks)
            .map_err(|e| BookmarkError::Store(e.to_string()))?;
        Ok(bookmarks)
    }

    fn list(&self) -> Vec<BookmarkEntry> {
        self.store.read(StoreName::Bookmarks)
    }
}
