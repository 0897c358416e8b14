//! History Recorder for Anechoic.
//!
//! Implements `HistoryRecorderTrait` — converting raw navigation signals from
//! the embedded browsing surface into durable `HistoryEntry` records in the
//! JSON-backed store.
//!
//! Policy per signal: reject excluded URLs, remove any existing record with
//! the same URL, prepend a fresh record, truncate to the newest 100, persist.
//! A later title signal for the same URL deliberately produces a second write
//! that moves the URL back to the front with the refined title — the list
//! orders by most recent activity, not first visit.

use std::sync::Arc;

use log::warn;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use url::{Host, Url};

use crate::storage::{JsonStore, StoreName};
use crate::types::channel::SurfaceSignal;
use crate::types::history::{HistoryEntry, FALLBACK_HISTORY_TITLE, MAX_HISTORY_ENTRIES};

/// Trait defining history recording operations.
pub trait HistoryRecorderTrait {
    /// Records one visit. Excluded URLs are a no-op; persistence failures are
    /// logged and swallowed — history is best-effort, never user-blocking.
    fn record_visit(&self, title: Option<&str>, url: &str);
    /// Feeds a raw surface signal through the recording policy.
    fn observe(&self, signal: &SurfaceSignal);
    /// Returns the persisted history list, most recent first.
    fn list(&self) -> Vec<HistoryEntry>;
}

/// Returns true if `url` must never produce a history entry.
///
/// Excluded: empty or unparsable URLs, `file:` references, and URLs whose
/// host is structurally local (the `localhost` domain or a loopback IP).
/// A URL whose path or query merely contains the text `localhost` is still
/// recorded.
pub fn is_excluded(url: &str) -> bool {
    if url.is_empty() {
        return true;
    }
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return true,
    };
    if parsed.scheme() == "file" {
        return true;
    }
    match parsed.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => true,
    }
}

/// History recorder backed by the JSON store.
pub struct HistoryRecorder {
    store: Arc<JsonStore>,
}

impl HistoryRecorder {
    /// Creates a new `HistoryRecorder` writing through the given store.
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Returns the current time as an ISO-8601 (RFC 3339) string.
    fn now_iso() -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default()
    }
}

impl HistoryRecorderTrait for HistoryRecorder {
    fn record_visit(&self, title: Option<&str>, url: &str) {
        if is_excluded(url) {
            return;
        }

        let mut history: Vec<HistoryEntry> = self.store.read(StoreName::History);

        // Delete-then-prepend: at most one record per URL, newest activity first.
        history.retain(|entry| entry.url != url);
        history.insert(
            0,
            HistoryEntry {
                title: title
                    .filter(|t| !t.is_empty())
                    .unwrap_or(FALLBACK_HISTORY_TITLE)
                    .to_string(),
                url: url.to_string(),
                timestamp: Self::now_iso(),
            },
        );
        history.truncate(MAX_HISTORY_ENTRIES);

        if let Err(e) = self.store.write(StoreName::History, &history) {
            warn!("Failed to persist history for {}: {}", url, e);
        }
    }

    fn observe(&self, signal: &SurfaceSignal) {
        match signal {
            SurfaceSignal::NavigationCompleted { url, title } => {
                self.record_visit(title.as_deref(), url);
            }
            SurfaceSignal::TitleFinalized { url, title } => {
                self.record_visit(Some(title.as_str()), url);
            }
        }
    }

    fn list(&self) -> Vec<HistoryEntry> {
        self.store.read(StoreName::History)
    }
}
