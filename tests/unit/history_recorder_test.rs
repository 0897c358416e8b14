//! Unit tests for the History Recorder.
//!
//! These exercise the recording policy end to end against a store in a temp
//! directory: deduplication, capacity, the exclusion rules, and the
//! last-writer-wins-by-recency behavior for title updates.

use std::sync::Arc;

use anechoic::managers::history_recorder::{is_excluded, HistoryRecorder, HistoryRecorderTrait};
use anechoic::storage::JsonStore;
use anechoic::types::channel::SurfaceSignal;
use rstest::rstest;
use tempfile::TempDir;

fn setup() -> (TempDir, HistoryRecorder) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let recorder = HistoryRecorder::new(Arc::new(JsonStore::with_dir(dir.path())));
    (dir, recorder)
}

/// Revisiting a URL keeps exactly one entry for it, at the front, with the
/// title from the most recent event.
#[test]
fn test_revisit_dedupes_to_front_with_latest_title() {
    let (_dir, recorder) = setup();

    recorder.record_visit(Some("A"), "http://x.test");
    recorder.record_visit(Some("B"), "http://x.test");
    recorder.record_visit(Some("C"), "http://y.test");

    let history = recorder.list();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].title, "C");
    assert_eq!(history[0].url, "http://y.test");
    assert_eq!(history[1].title, "B");
    assert_eq!(history[1].url, "http://x.test");
}

/// The list never exceeds 100 entries; the oldest are evicted first.
#[test]
fn test_capacity_evicts_oldest() {
    let (_dir, recorder) = setup();

    for i in 0..105 {
        recorder.record_visit(Some(&format!("Page {}", i)), &format!("https://site{}.test", i));
    }

    let history = recorder.list();
    assert_eq!(history.len(), 100);
    // Newest first; site0 through site4 were evicted.
    assert_eq!(history[0].url, "https://site104.test");
    assert_eq!(history[99].url, "https://site5.test");
    assert!(!history.iter().any(|e| e.url == "https://site4.test"));
}

/// A missing title records the placeholder.
#[test]
fn test_missing_title_uses_placeholder() {
    let (_dir, recorder) = setup();

    recorder.record_visit(None, "https://example.com");
    let history = recorder.list();
    assert_eq!(history[0].title, "Unknown");

    recorder.record_visit(Some(""), "https://example.com");
    assert_eq!(recorder.list()[0].title, "Unknown");
}

/// A later title-finalized signal moves the URL back to the front with the
/// refined title.
#[test]
fn test_title_signal_refreshes_entry() {
    let (_dir, recorder) = setup();

    recorder.observe(&SurfaceSignal::NavigationCompleted {
        url: "https://example.com".to_string(),
        title: None,
    });
    recorder.observe(&SurfaceSignal::NavigationCompleted {
        url: "https://other.test".to_string(),
        title: Some("Other".to_string()),
    });
    recorder.observe(&SurfaceSignal::TitleFinalized {
        url: "https://example.com".to_string(),
        title: "Example Domain".to_string(),
    });

    let history = recorder.list();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].url, "https://example.com");
    assert_eq!(history[0].title, "Example Domain");
    assert_eq!(history[1].url, "https://other.test");
}

/// Excluded navigations leave the store completely untouched — not even an
/// empty file is created.
#[test]
fn test_excluded_url_leaves_store_untouched() {
    let (dir, recorder) = setup();

    recorder.record_visit(Some("Dev"), "http://localhost:3000/app");
    recorder.record_visit(Some("File"), "file:///home/user/notes.html");

    assert!(recorder.list().is_empty());
    assert!(!dir.path().join("history.json").exists());
}

#[rstest]
#[case("", true)]
#[case("not a url", true)]
#[case("file:///etc/hosts", true)]
#[case("http://localhost/page", true)]
#[case("http://LOCALHOST:8080/", true)]
#[case("http://127.0.0.1:5000/chat", true)]
#[case("http://[::1]/", true)]
#[case("https://example.com", false)]
#[case("http://example.com/path?q=1", false)]
// A URL merely containing the text "localhost" outside the host is recorded.
#[case("https://example.com/docs/localhost-setup", false)]
#[case("https://example.com/?q=localhost", false)]
fn test_exclusion_policy(#[case] url: &str, #[case] excluded: bool) {
    assert_eq!(is_excluded(url), excluded, "url: {}", url);
}

/// History persists across recorder instances sharing a data directory.
#[test]
fn test_history_survives_recorder_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let recorder = HistoryRecorder::new(Arc::new(JsonStore::with_dir(dir.path())));
        recorder.record_visit(Some("Example"), "https://example.com");
    }

    let recorder = HistoryRecorder::new(Arc::new(JsonStore::with_dir(dir.path())));
    let history = recorder.list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].url, "https://example.com");
}

/// Every stored entry carries a parseable RFC 3339 timestamp.
#[test]
fn test_timestamp_is_rfc3339() {
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    let (_dir, recorder) = setup();
    recorder.record_visit(Some("Example"), "https://example.com");

    let history = recorder.list();
    assert!(OffsetDateTime::parse(&history[0].timestamp, &Rfc3339).is_ok());
}
