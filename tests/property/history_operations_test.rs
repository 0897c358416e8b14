//! Property-based tests for History Recorder operations.
//!
//! These verify the dedupe-by-URL and capacity invariants of the history
//! log over arbitrary visit sequences.

use std::sync::Arc;

use anechoic::managers::history_recorder::{HistoryRecorder, HistoryRecorderTrait};
use anechoic::storage::JsonStore;
use anechoic::types::history::MAX_HISTORY_ENTRIES;
use proptest::prelude::*;

/// Strategy for generating valid, non-excluded URL strings.
/// Produces URLs with http/https scheme, alphanumeric host, and optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating optional page titles.
fn arb_title() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z][a-zA-Z0-9 ]{1,30}")
}

fn fresh_recorder() -> (tempfile::TempDir, HistoryRecorder) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let recorder = HistoryRecorder::new(Arc::new(JsonStore::with_dir(dir.path())));
    (dir, recorder)
}

// **Property 1: History dedupe and ordering**
//
// *For any* sequence of visits, the history never contains two entries with
// the same URL, and the most recently visited URL is the first entry.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn history_has_unique_urls_and_recency_order(
        visits in proptest::collection::vec((arb_title(), arb_url()), 1..40),
    ) {
        let (_dir, recorder) = fresh_recorder();

        for (title, url) in &visits {
            recorder.record_visit(title.as_deref(), url);
        }

        let history = recorder.list();

        let mut seen = std::collections::HashSet::new();
        for entry in &history {
            prop_assert!(
                seen.insert(entry.url.clone()),
                "History contains duplicate URL '{}'",
                entry.url
            );
        }

        let (_, last_url) = visits.last().unwrap();
        prop_assert_eq!(
            &history[0].url,
            last_url,
            "Most recent visit must be the first entry"
        );

        let distinct = seen.len();
        prop_assert_eq!(
            history.len(),
            distinct.min(MAX_HISTORY_ENTRIES),
            "History length must equal the number of distinct URLs, capped"
        );
    }
}

// **Property 2: History capacity bound**
//
// *For any* sequence of visits to distinct URLs, the history holds at most
// 100 entries and retains the most recent ones.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn history_never_exceeds_capacity(extra in 1usize..30) {
        let (_dir, recorder) = fresh_recorder();

        let total = MAX_HISTORY_ENTRIES + extra;
        for i in 0..total {
            recorder.record_visit(None, &format!("https://site{}.example", i));
        }

        let history = recorder.list();
        prop_assert_eq!(history.len(), MAX_HISTORY_ENTRIES);

        // The oldest `extra` entries were evicted.
        prop_assert_eq!(
            &history[0].url,
            &format!("https://site{}.example", total - 1)
        );
        prop_assert_eq!(
            &history[MAX_HISTORY_ENTRIES - 1].url,
            &format!("https://site{}.example", extra)
        );
    }
}

// **Property 3: Revisit moves an entry to the front with the new title**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn revisit_promotes_and_retitles(
        first_title in arb_title(),
        second_title in "[a-zA-Z][a-zA-Z0-9 ]{1,30}",
        url in arb_url(),
        others in proptest::collection::vec(arb_url(), 1..10),
    ) {
        let (_dir, recorder) = fresh_recorder();

        recorder.record_visit(first_title.as_deref(), &url);
        for other in &others {
            recorder.record_visit(None, other);
        }
        recorder.record_visit(Some(second_title.as_str()), &url);

        let history = recorder.list();
        prop_assert_eq!(&history[0].url, &url);
        prop_assert_eq!(&history[0].title, &second_title);
        prop_assert_eq!(
            history.iter().filter(|e| e.url == url).count(),
            1,
            "Revisited URL must appear exactly once"
        );
    }
}
