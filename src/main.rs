//! Anechoic — a customizable homepage shell with an embedded browsing surface.
//!
//! Entry point: launches the WebView homepage shell. When built without the
//! `gui` feature, runs a console demo of the core components instead.

#[cfg(feature = "gui")]
fn main() {
    env_logger::init();
    anechoic::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               Anechoic v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Homepage shell: history, bookmarks, control channel    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_store();
    demo_history();
    demo_bookmarks();
    demo_channel();
    demo_ribbon();
    demo_chat_config();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All core components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_dir(sub: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("anechoic-demo").join(sub);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[cfg(not(feature = "gui"))]
fn demo_store() {
    use anechoic::storage::{JsonStore, StoreName};
    use anechoic::types::history::HistoryEntry;

    section("Persistent Store");
    let store = JsonStore::with_dir(demo_dir("store"));
    let records = vec![HistoryEntry {
        title: "Example".into(),
        url: "https://example.com".into(),
        timestamp: "2024-01-01T00:00:00Z".into(),
    }];
    store.write(StoreName::History, &records).expect("write failed");
    let loaded: Vec<HistoryEntry> = store.read(StoreName::History);
    println!("  Wrote and re-read {} record(s) from {:?}", loaded.len(), store.data_dir());
}

#[cfg(not(feature = "gui"))]
fn demo_history() {
    use anechoic::managers::history_recorder::{HistoryRecorder, HistoryRecorderTrait};
    use anechoic::storage::JsonStore;
    use std::sync::Arc;

    section("History Recorder");
    let recorder = HistoryRecorder::new(Arc::new(JsonStore::with_dir(demo_dir("history"))));
    recorder.record_visit(Some("Example"), "https://example.com");
    recorder.record_visit(Some("Rust"), "https://rust-lang.org");
    recorder.record_visit(Some("Example again"), "https://example.com");
    recorder.record_visit(Some("Dev server"), "http://localhost:3000"); // excluded
    for entry in recorder.list() {
        println!("  {} — {}", entry.title, entry.url);
    }
}

#[cfg(not(feature = "gui"))]
fn demo_bookmarks() {
    use anechoic::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
    use anechoic::storage::JsonStore;
    use std::sync::Arc;

    section("Bookmark Manager");
    let manager = BookmarkManager::new(Arc::new(JsonStore::with_dir(demo_dir("bookmarks"))));
    manager.add(Some("Example"), "https://example.com").expect("add failed");
    match manager.add(Some("Duplicate"), "https://example.com") {
        Err(e) => println!("  Duplicate add rejected: {}", e),
        Ok(_) => println!("  Unexpected: duplicate accepted"),
    }
    println!("  {} bookmark(s) stored", manager.list().len());
}

#[cfg(not(feature = "gui"))]
fn demo_channel() {
    use anechoic::app::App;
    use anechoic::channel_handler::{handle_request, SurfaceControl};
    use anechoic::storage::JsonStore;
    use anechoic::types::channel::ChannelRequest;
    use std::sync::{Arc, Mutex};

    struct ConsoleSurface;
    impl SurfaceControl for ConsoleSurface {
        fn navigate(&self, url: &str) {
            println!("  [surface] navigate → {}", url);
        }
        fn go_back(&self) {}
        fn go_forward(&self) {}
        fn reload(&self) {}
        fn hide(&self) {
            println!("  [surface] hidden");
        }
        fn open_chat_window(&self, url: &str) -> Result<(), String> {
            println!("  [surface] chat window opened at {}", url);
            Ok(())
        }
        fn focus_chat_window(&self) {
            println!("  [surface] chat window focused");
        }
    }

    section("Control Channel");
    let app = Mutex::new(App::with_store(Arc::new(JsonStore::with_dir(demo_dir("channel")))));
    let surface = ConsoleSurface;

    let response = handle_request(
        &app,
        &surface,
        ChannelRequest::AddBookmark {
            title: Some("Example".into()),
            url: Some("https://example.com".into()),
        },
    );
    println!("  add-bookmark → ok={}", response.ok);

    handle_request(&app, &surface, ChannelRequest::Navigate { url: "https://example.com".into() });

    // Second open focuses instead of duplicating the window.
    handle_request(&app, &surface, ChannelRequest::OpenChatWindow);
    handle_request(&app, &surface, ChannelRequest::OpenChatWindow);
}

#[cfg(not(feature = "gui"))]
fn demo_ribbon() {
    use anechoic::managers::recent_ribbon::RecentRibbon;

    section("Recent Ribbon");
    let mut ribbon = RecentRibbon::new();
    ribbon.push("https://a.test");
    ribbon.push("https://a.test"); // adjacent duplicate, suppressed
    ribbon.push("https://b.test");
    println!("  {} entries: {:?}", ribbon.len(), ribbon.urls());
}

#[cfg(not(feature = "gui"))]
fn demo_chat_config() {
    use anechoic::services::chat_service;

    section("Chat Service");
    println!("  Base URL: {}", chat_service::base_url_from_env());
}
