//! Anechoic UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The homepage is rendered as HTML/CSS/JS inside the WebView and talks to
//! the Rust host exclusively over the Control Channel (wry IPC in, injected
//! event bridge out). External pages load into the same WebView, which acts
//! as the embedded browsing surface.

pub mod webview_app;
