//! Property-based tests for Bookmark Manager operations.
//!
//! These verify URL uniqueness, newest-first ordering, and removal
//! behavior over arbitrary valid URLs and titles.

use std::sync::Arc;

use anechoic::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use anechoic::storage::JsonStore;
use anechoic::types::errors::BookmarkError;
use proptest::prelude::*;

/// Strategy for generating valid URL strings.
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

/// Strategy for generating non-empty bookmark titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}"
}

fn fresh_manager() -> (tempfile::TempDir, BookmarkManager) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let manager = BookmarkManager::new(Arc::new(JsonStore::with_dir(dir.path())));
    (dir, manager)
}

// **Property 4: Bookmark add-then-list**
//
// *For any* valid URL and title, adding a bookmark places it at the front of
// the list with that URL and title.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn bookmark_add_then_list_front(
        url in arb_url(),
        title in arb_title(),
    ) {
        let (_dir, manager) = fresh_manager();

        let list = manager
            .add(Some(title.as_str()), &url)
            .expect("add should succeed for valid inputs");

        prop_assert_eq!(&list[0].url, &url);
        prop_assert_eq!(&list[0].title, &title);
        prop_assert_eq!(list, manager.list());
    }
}

// **Property 5: Bookmark URL uniqueness**
//
// *For any* sequence of adds, the bookmark list never contains two entries
// with the same URL; repeated adds fail without changing the list.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn bookmark_urls_are_unique(
        adds in proptest::collection::vec((arb_title(), arb_url()), 1..20),
    ) {
        let (_dir, manager) = fresh_manager();

        let mut expected_distinct = std::collections::HashSet::new();
        for (title, url) in &adds {
            let result = manager.add(Some(title.as_str()), url);
            if expected_distinct.insert(url.clone()) {
                prop_assert!(result.is_ok(), "First add of '{}' must succeed", url);
            } else {
                prop_assert!(
                    matches!(result, Err(BookmarkError::DuplicateUrl(_))),
                    "Repeated add of '{}' must be rejected",
                    url
                );
            }
        }

        let list = manager.list();
        prop_assert_eq!(list.len(), expected_distinct.len());

        let mut seen = std::collections::HashSet::new();
        for entry in &list {
            prop_assert!(
                seen.insert(entry.url.clone()),
                "Bookmark list contains duplicate URL '{}'",
                entry.url
            );
        }
    }
}

// **Property 6: Remove deletes exactly the matching URL**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn remove_deletes_only_matching(
        adds in proptest::collection::vec((arb_title(), arb_url()), 2..15),
        pick in 0usize..14,
    ) {
        let (_dir, manager) = fresh_manager();

        for (title, url) in &adds {
            let _ = manager.add(Some(title.as_str()), url);
        }

        let before = manager.list();
        let target = before[pick % before.len()].url.clone();

        let after = manager.remove(&target).expect("remove should succeed");
        prop_assert!(after.iter().all(|e| e.url != target));
        prop_assert_eq!(after.len(), before.len() - 1);

        // Everything else survives in order.
        let survivors: Vec<_> = before.into_iter().filter(|e| e.url != target).collect();
        prop_assert_eq!(after, survivors);
    }
}
