//! Unit tests for the JSON-backed persistent store.
//!
//! These exercise the store's degradation contract (missing/corrupt files
//! read as empty), the overwrite semantics, and the on-disk shape of the
//! persisted files.

use anechoic::storage::{JsonStore, StoreName};
use anechoic::types::bookmark::BookmarkEntry;
use anechoic::types::history::HistoryEntry;

fn history_entry(title: &str, url: &str) -> HistoryEntry {
    HistoryEntry {
        title: title.to_string(),
        url: url.to_string(),
        timestamp: "2024-06-01T12:00:00Z".to_string(),
    }
}

/// A fresh store with no backing files reads as empty for every name.
#[test]
fn test_fresh_store_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::with_dir(dir.path());

    let history: Vec<HistoryEntry> = store.read(StoreName::History);
    let bookmarks: Vec<BookmarkEntry> = store.read(StoreName::Bookmarks);
    assert!(history.is_empty());
    assert!(bookmarks.is_empty());
}

/// Records written by one store instance are visible to another instance
/// rooted at the same directory.
#[test]
fn test_roundtrip_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    let writer = JsonStore::with_dir(dir.path());
    let records = vec![
        history_entry("Example", "https://example.com"),
        history_entry("Rust", "https://rust-lang.org"),
    ];
    writer.write(StoreName::History, &records).unwrap();

    let reader = JsonStore::with_dir(dir.path());
    let loaded: Vec<HistoryEntry> = reader.read(StoreName::History);
    assert_eq!(loaded, records);
}

/// A corrupt backing file degrades to an empty read instead of an error,
/// and a subsequent write replaces it cleanly.
#[test]
fn test_corrupt_file_degrades_then_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::with_dir(dir.path());
    std::fs::write(dir.path().join("bookmarks.json"), "not json at all").unwrap();

    let loaded: Vec<BookmarkEntry> = store.read(StoreName::Bookmarks);
    assert!(loaded.is_empty());

    let entry = BookmarkEntry {
        title: "Site".to_string(),
        url: "https://z.test".to_string(),
        added_at: "2024-06-01T12:00:00Z".to_string(),
    };
    store.write(StoreName::Bookmarks, &[entry.clone()]).unwrap();
    let reloaded: Vec<BookmarkEntry> = store.read(StoreName::Bookmarks);
    assert_eq!(reloaded, vec![entry]);
}

/// The bookmark file uses the external field name `addedAt`.
#[test]
fn test_bookmark_file_uses_added_at_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::with_dir(dir.path());

    store
        .write(
            StoreName::Bookmarks,
            &[BookmarkEntry {
                title: "Site".to_string(),
                url: "https://z.test".to_string(),
                added_at: "2024-06-01T12:00:00Z".to_string(),
            }],
        )
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("bookmarks.json")).unwrap();
    assert!(raw.contains("\"addedAt\""));
    assert!(!raw.contains("\"added_at\""));
}

/// Each write replaces the whole sequence; nothing is appended.
#[test]
fn test_write_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::with_dir(dir.path());

    store
        .write(
            StoreName::History,
            &[
                history_entry("A", "https://a.test"),
                history_entry("B", "https://b.test"),
                history_entry("C", "https://c.test"),
            ],
        )
        .unwrap();
    store
        .write(StoreName::History, &[history_entry("D", "https://d.test")])
        .unwrap();

    let loaded: Vec<HistoryEntry> = store.read(StoreName::History);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].url, "https://d.test");
}
