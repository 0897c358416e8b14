//! Control Channel message types.
//!
//! The Control Channel is the only way the sandboxed homepage UI can request
//! host-side effects or read host-owned state. Instead of matching on loose
//! channel-name strings, the whole surface is a closed set of typed messages:
//! a request enum with fixed kebab-case wire names, one uniform response
//! shape, and a host→UI event enum. Any inbound name outside these sets fails
//! to parse and is dropped without dispatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A UI→host request. Wire format is a JSON object tagged by `cmd`, e.g.
/// `{"cmd":"add-bookmark","title":"Site","url":"https://z.test"}`.
///
/// The wire names are a fixed external contract; renaming a variant breaks
/// the homepage UI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum ChannelRequest {
    /// Open (or focus, if already live) the companion chat window.
    OpenChatWindow,
    /// Return the persisted history list.
    GetHistory,
    /// Return the persisted bookmark list.
    GetBookmarks,
    /// Add a bookmark. Missing `url` is a validation error, not a parse error,
    /// so the field is optional here and checked by the Bookmark Manager.
    AddBookmark {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
    /// Remove all bookmarks matching `url`. Removing an absent URL succeeds.
    RemoveBookmark {
        #[serde(default)]
        url: Option<String>,
    },
    /// Drive the browsing surface to `url`. Fire-and-forget for the UI.
    Navigate { url: String },
    GoBack,
    GoForward,
    Reload,
    /// Hide the browsing surface and return to the homepage.
    HideBrowsingSurface,
}

impl ChannelRequest {
    /// Parses a raw IPC message body. Returns `None` for anything outside the
    /// closed request set — the caller drops such messages without dispatch.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Wire name of this request, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ChannelRequest::OpenChatWindow => "open-chat-window",
            ChannelRequest::GetHistory => "get-history",
            ChannelRequest::GetBookmarks => "get-bookmarks",
            ChannelRequest::AddBookmark { .. } => "add-bookmark",
            ChannelRequest::RemoveBookmark { .. } => "remove-bookmark",
            ChannelRequest::Navigate { .. } => "navigate",
            ChannelRequest::GoBack => "go-back",
            ChannelRequest::GoForward => "go-forward",
            ChannelRequest::Reload => "reload",
            ChannelRequest::HideBrowsingSurface => "hide-browsing-surface",
        }
    }
}

/// The uniform response shape every request resolves to. No error ever
/// crosses the trust boundary in any other form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChannelResponse {
    pub fn success() -> Self {
        Self { ok: true, data: None, error: None }
    }

    pub fn with_data(data: Value) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { ok: false, data: None, error: Some(error.into()) }
    }
}

/// A host→UI event. Zero or more deliveries, no acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HostEvent {
    /// The browsing surface's location changed. Delivered in the order the
    /// underlying navigations committed.
    UrlUpdated { url: String },
}

impl HostEvent {
    /// Wire name of the event's subscription channel.
    pub fn channel_name(&self) -> &'static str {
        match self {
            HostEvent::UrlUpdated { .. } => "url-updated",
        }
    }
}

/// Event channels the UI is allowed to subscribe to. Baked into the injected
/// bridge, whose subscription call ignores every other name.
pub const SUBSCRIBABLE_EVENTS: &[&str] = &["url-updated"];

/// Raw navigation signals observed from the embedded browsing surface.
///
/// These are host-internal: they originate from the surface instrumentation,
/// not from the homepage UI, and are never dispatchable as channel requests
/// (note the distinct `signal` tag). The History Recorder consumes them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "signal", rename_all = "kebab-case")]
pub enum SurfaceSignal {
    /// A navigation committed. The title may not be known yet.
    NavigationCompleted {
        url: String,
        #[serde(default)]
        title: Option<String>,
    },
    /// The page's display title became available or changed.
    TitleFinalized { url: String, title: String },
}

impl SurfaceSignal {
    /// Parses a raw surface instrumentation message. `None` means the message
    /// is not a recognized signal.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
