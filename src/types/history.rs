use serde::{Deserialize, Serialize};

/// A single browsing history record as persisted in `history.json`.
///
/// The list on disk is ordered most-recent-first, holds at most
/// [`MAX_HISTORY_ENTRIES`] records, and contains at most one entry per URL.
/// Entries are never mutated in place — a revisit deletes the old record and
/// prepends a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub url: String,
    /// ISO-8601 timestamp set at insertion time.
    pub timestamp: String,
}

/// Maximum number of history records kept on disk; oldest beyond this are dropped.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Title recorded when a page never reported one.
pub const FALLBACK_HISTORY_TITLE: &str = "Unknown";
