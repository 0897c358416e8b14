//! App Core for Anechoic.
//!
//! Central struct holding all host-owned state: the persistent stores, the
//! history and bookmark managers, the chat service handle, and the chat
//! window's open flag. The UI shell never touches any of this directly — it
//! only sees copies returned over the Control Channel.

use std::sync::Arc;

use log::{debug, warn};

use crate::managers::bookmark_manager::BookmarkManager;
use crate::managers::history_recorder::{HistoryRecorder, HistoryRecorderTrait};
use crate::services::chat_service::ChatService;
use crate::storage::JsonStore;
use crate::types::channel::SurfaceSignal;

/// Directory (relative to the working directory) holding the chat backend.
const CHAT_SERVICE_DIR: &str = "chatroom";

/// Central application struct for the privileged host process.
pub struct App {
    pub store: Arc<JsonStore>,
    pub history: HistoryRecorder,
    pub bookmarks: BookmarkManager,
    pub chat: ChatService,
    chat_window_open: bool,
    last_committed_url: Option<String>,
}

impl App {
    /// Creates the host state rooted at the platform data directory.
    pub fn new() -> Self {
        Self::with_store(Arc::new(JsonStore::new()))
    }

    /// Creates the host state over an explicit store. Used by tests.
    pub fn with_store(store: Arc<JsonStore>) -> Self {
        let history = HistoryRecorder::new(store.clone());
        let bookmarks = BookmarkManager::new(store.clone());
        let chat = ChatService::new(CHAT_SERVICE_DIR);
        Self {
            store,
            history,
            bookmarks,
            chat,
            chat_window_open: false,
            last_committed_url: None,
        }
    }

    /// Notes that the browsing surface committed a navigation to `url`.
    pub fn note_navigation(&mut self, url: &str) {
        self.last_committed_url = Some(url.to_string());
    }

    /// Applies a raw surface signal to the history, provided it refers to the
    /// page the surface actually committed. Pages run arbitrary script, so a
    /// signal naming any other URL is discarded without effect.
    pub fn observe_surface_signal(&self, signal: &SurfaceSignal) {
        let url = match signal {
            SurfaceSignal::NavigationCompleted { url, .. } => url,
            SurfaceSignal::TitleFinalized { url, .. } => url,
        };
        if self.last_committed_url.as_deref() != Some(url.as_str()) {
            debug!("Ignoring surface signal for uncommitted URL {}", url);
            return;
        }
        self.history.observe(signal);
    }

    /// Startup sequence: launch the chat backend best-effort.
    pub fn startup(&mut self) {
        if let Err(e) = self.chat.spawn() {
            warn!("Chat service unavailable: {}", e);
        }
    }

    /// Shutdown sequence: stop the chat backend.
    pub fn shutdown(&mut self) {
        self.chat.shutdown();
    }

    /// True while a live chat window handle exists.
    pub fn chat_window_open(&self) -> bool {
        self.chat_window_open
    }

    pub fn mark_chat_window_open(&mut self) {
        self.chat_window_open = true;
    }

    /// Called when the platform closes the chat window, so the next
    /// `open-chat-window` creates a fresh one.
    pub fn mark_chat_window_closed(&mut self) {
        self.chat_window_open = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
