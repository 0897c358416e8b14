//! Control Channel request handler for Anechoic.
//!
//! Extracted from the UI shell so it can be unit-tested independently.
//! `handle_request` dispatches a typed [`ChannelRequest`] to the managers via
//! the `App` struct and converts every outcome — including lock and store
//! failures — into the uniform `{ok, data?, error?}` response shape. No
//! error crosses the trust boundary in any other form.
//!
//! The `App` mutex is held for the whole body of each handler, so store
//! read-modify-write sequences from back-to-back requests serialize instead
//! of interleaving.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::managers::history_recorder::HistoryRecorderTrait;
use crate::types::channel::{ChannelRequest, ChannelResponse};

/// Host-side control of the embedded browsing surface and the chat window.
///
/// The UI shell implements this over its event loop; tests substitute a mock.
/// All commands for a given surface flow through a single implementor, which
/// is what keeps near-simultaneous navigations from racing on it.
pub trait SurfaceControl {
    fn navigate(&self, url: &str);
    fn go_back(&self);
    fn go_forward(&self);
    fn reload(&self);
    /// Hide the browsing surface and show the homepage again.
    fn hide(&self);
    /// Create the chat window loading `url`.
    fn open_chat_window(&self, url: &str) -> Result<(), String>;
    /// Bring an already-open chat window to the front.
    fn focus_chat_window(&self);
}

/// Dispatches one Control Channel request and produces its response.
pub fn handle_request(
    app: &Mutex<App>,
    surface: &dyn SurfaceControl,
    request: ChannelRequest,
) -> ChannelResponse {
    match request {
        ChannelRequest::OpenChatWindow => {
            let mut a = match app.lock() {
                Ok(a) => a,
                Err(e) => return ChannelResponse::failure(e.to_string()),
            };
            // Idempotent: a live window gets focused, never duplicated.
            if a.chat_window_open() {
                surface.focus_chat_window();
                return ChannelResponse::success();
            }
            match surface.open_chat_window(a.chat.base_url()) {
                Ok(()) => {
                    a.mark_chat_window_open();
                    ChannelResponse::success()
                }
                Err(e) => ChannelResponse::failure(e),
            }
        }

        ChannelRequest::GetHistory => {
            let a = match app.lock() {
                Ok(a) => a,
                Err(e) => return ChannelResponse::failure(e.to_string()),
            };
            match serde_json::to_value(a.history.list()) {
                Ok(data) => ChannelResponse::with_data(data),
                Err(e) => ChannelResponse::failure(e.to_string()),
            }
        }

        ChannelRequest::GetBookmarks => {
            let a = match app.lock() {
                Ok(a) => a,
                Err(e) => return ChannelResponse::failure(e.to_string()),
            };
            match serde_json::to_value(a.bookmarks.list()) {
                Ok(data) => ChannelResponse::with_data(data),
                Err(e) => ChannelResponse::failure(e.to_string()),
            }
        }

        ChannelRequest::AddBookmark { title, url } => {
            let a = match app.lock() {
                Ok(a) => a,
                Err(e) => return ChannelResponse::failure(e.to_string()),
            };
            match a
                .bookmarks
                .add(title.as_deref(), url.as_deref().unwrap_or(""))
            {
                Ok(list) => match serde_json::to_value(list) {
                    Ok(data) => ChannelResponse::with_data(data),
                    Err(e) => ChannelResponse::failure(e.to_string()),
                },
                Err(e) => ChannelResponse::failure(e.to_string()),
            }
        }

        ChannelRequest::RemoveBookmark { url } => {
            let a = match app.lock() {
                Ok(a) => a,
                Err(e) => return ChannelResponse::failure(e.to_string()),
            };
            match a.bookmarks.remove(url.as_deref().unwrap_or("")) {
                Ok(list) => match serde_json::to_value(list) {
                    Ok(data) => ChannelResponse::with_data(data),
                    Err(e) => ChannelResponse::failure(e.to_string()),
                },
                Err(e) => ChannelResponse::failure(e.to_string()),
            }
        }

        ChannelRequest::Navigate { url } => {
            surface.navigate(&url);
            ChannelResponse::success()
        }

        ChannelRequest::GoBack => {
            surface.go_back();
            ChannelResponse::success()
        }

        ChannelRequest::GoForward => {
            surface.go_forward();
            ChannelResponse::success()
        }

        ChannelRequest::Reload => {
            surface.reload();
            ChannelResponse::success()
        }

        ChannelRequest::HideBrowsingSurface => {
            surface.hide();
            ChannelResponse::success()
        }
    }
}
