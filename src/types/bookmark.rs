use serde::{Deserialize, Serialize};

/// A saved bookmark as persisted in `bookmarks.json`.
///
/// `url` is the unique key — insertion fails when it already exists. The list
/// is ordered most-recent-first and is never auto-pruned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub title: String,
    pub url: String,
    /// ISO-8601 timestamp set when the bookmark was added.
    #[serde(rename = "addedAt")]
    pub added_at: String,
}

/// Title recorded when the user saved a page without one.
pub const FALLBACK_BOOKMARK_TITLE: &str = "Untitled";
