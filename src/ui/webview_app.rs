//! WebView-based homepage shell using `wry` + `tao`.
//!
//! Architecture:
//! - The homepage is served via the `an://` custom protocol.
//! - External sites are loaded into the same WebView via `load_url()` — that
//!   WebView is the embedded browsing surface.
//! - UI → host: `window.ipc.postMessage()` carrying Control Channel requests
//!   (closed typed set; anything else is dropped without dispatch).
//! - Host → UI: `evaluate_script()` resolving pending requests and delivering
//!   allow-listed events through the injected bridge.
//! - The chat window is a second `tao` window created on demand, loading the
//!   chat service base URL; closing it clears the handle so the next
//!   `open-chat-window` creates a fresh one.

use std::sync::{Arc, Mutex};

use log::{debug, error, info, warn};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder, WindowId};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::app::App;
use crate::channel_handler::{self, SurfaceControl};
use crate::managers::history_recorder::HistoryRecorderTrait;
use crate::managers::recent_ribbon::RecentRibbon;
use crate::types::channel::{
    ChannelRequest, ChannelResponse, HostEvent, SurfaceSignal, SUBSCRIBABLE_EVENTS,
};

const HOMEPAGE_URL: &str = "an://localhost/home";

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    OpenChatWindow(String),
    FocusChatWindow,
    /// A navigation committed on the browsing surface.
    NavigationCommitted(String),
}

/// UI-shell render state. Host-owned state lives in `App`; this is only what
/// the shell needs to redraw the homepage chrome. The address field itself is
/// kept in the page and updated through the `url-updated` subscription.
struct ShellState {
    ribbon: RecentRibbon,
}

/// `SurfaceControl` implementor that forwards every command through the
/// event-loop proxy. All surface commands funnel through the single event
/// loop, so navigations are serialized per surface.
struct EventLoopSurface {
    proxy: EventLoopProxy<UserEvent>,
}

impl SurfaceControl for EventLoopSurface {
    fn navigate(&self, url: &str) {
        let _ = self.proxy.send_event(UserEvent::LoadUrl(normalize_url(url)));
    }

    fn go_back(&self) {
        let _ = self
            .proxy
            .send_event(UserEvent::EvalScript("history.back()".into()));
    }

    fn go_forward(&self) {
        let _ = self
            .proxy
            .send_event(UserEvent::EvalScript("history.forward()".into()));
    }

    fn reload(&self) {
        let _ = self
            .proxy
            .send_event(UserEvent::EvalScript("location.reload()".into()));
    }

    fn hide(&self) {
        let _ = self.proxy.send_event(UserEvent::LoadUrl(HOMEPAGE_URL.into()));
        let _ = self.proxy.send_event(UserEvent::EvalScript(
            "if(window.__an_setAddress)__an_setAddress('')".into(),
        ));
    }

    fn open_chat_window(&self, url: &str) -> Result<(), String> {
        self.proxy
            .send_event(UserEvent::OpenChatWindow(url.to_string()))
            .map_err(|e| e.to_string())
    }

    fn focus_chat_window(&self) {
        let _ = self.proxy.send_event(UserEvent::FocusChatWindow);
    }
}

/// Bridge injected into every page: request/response plumbing, the event
/// subscription table, and the title-finalized surface instrumentation.
/// `@SUBSCRIBABLE@` is replaced with the allow-listed event channels;
/// `__an_on` ignores every other name.
const BRIDGE_TEMPLATE: &str = r#"
(function(){
  if (window.__an_bridge) return;
  window.__an_bridge = true;
  var allowed = [@SUBSCRIBABLE@];
  var handlers = {};
  var pending = {};
  var seq = 0;
  window.__an_on = function(channel, cb){
    if (allowed.indexOf(channel) === -1) return;
    handlers[channel] = cb;
  };
  window.__an_emit = function(channel, payload){ if (handlers[channel]) handlers[channel](payload); };
  window.__an_call = function(msg){
    return new Promise(function(resolve){
      msg.id = ++seq;
      pending[msg.id] = resolve;
      window.ipc.postMessage(JSON.stringify(msg));
    });
  };
  window.__an_resolve = function(id, response){
    var r = pending[id];
    if (r) { delete pending[id]; r(response); }
  };
  function reportTitle(){
    if (!document.title) return;
    window.ipc.postMessage(JSON.stringify({signal:'title-finalized', url: location.href, title: document.title}));
  }
  window.addEventListener('load', function(){
    reportTitle();
    var t = document.querySelector('title');
    if (t) new MutationObserver(reportTitle).observe(t, {childList: true});
  });
})();
"#;

/// Renders the bridge with the subscribable event channels baked in.
fn bridge_js() -> String {
    let channels = SUBSCRIBABLE_EVENTS
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(",");
    BRIDGE_TEMPLATE.replace("@SUBSCRIBABLE@", &channels)
}

/// Builds the homepage served over `an://localhost/home`.
fn homepage_html() -> String {
    let body = r#"<div class="home">
<aside class="sidebar">
<h2>Recent</h2>
<ul id="recent-list"></ul>
<h2>Bookmarks</h2>
<ul id="bookmark-list"></ul>
<button id="chat-btn">Open Chatroom</button>
</aside>
<main class="content">
<div class="logo">Anechoic</div>
<div class="toolbar">
<button id="nav-back">&#8592;</button>
<button id="nav-forward">&#8594;</button>
<button id="nav-reload">&#8635;</button>
<button id="nav-home">&#8962;</button>
<input id="address" type="text" readonly />
</div>
<div class="engines">
<button class="engine-button active" data-engine="bing">Bing</button>
<button class="engine-button" data-engine="google">Google</button>
<button class="engine-button" data-engine="yahoo">Yahoo</button>
</div>
<div class="search">
<input id="search-input" type="text" placeholder="Search the web or enter URL..." autofocus />
</div>
<div class="tiles">
<div class="tile" data-url="https://github.com">GitHub</div>
<div class="tile" data-url="https://wikipedia.org">Wikipedia</div>
<div class="tile" data-url="https://youtube.com">YouTube</div>
<div class="tile" data-url="https://reddit.com">Reddit</div>
</div>
<h2>History</h2>
<ul id="history-list"></ul>
</main>
</div>"#;

    let css = r#"
:root{--bg:#667eea;--surface:#ffffff;--text:#333333;--accent:#ff4757}
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif;background:var(--bg);color:var(--text);height:100vh}
.home{display:flex;height:100%}
.sidebar{width:240px;background:var(--surface);padding:16px;overflow-y:auto}
.sidebar h2{font-size:13px;margin:12px 0 6px;text-transform:uppercase;color:#888}
.sidebar ul{list-style:none}
.sidebar li{font-size:13px;padding:4px 0;cursor:pointer;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.sidebar li:hover{color:var(--accent)}
.content{flex:1;padding:48px;overflow-y:auto}
.logo{font-size:42px;font-weight:700;color:var(--surface);margin-bottom:24px}
.toolbar{display:flex;gap:6px;margin-bottom:12px}
.toolbar input{flex:1;padding:6px 10px;border:none;border-radius:6px}
.engines{display:flex;gap:6px;margin-bottom:8px}
.engine-button.active{background:var(--accent);color:#fff}
.search input{width:100%;padding:12px 16px;border:none;border-radius:8px;font-size:16px}
.tiles{display:flex;gap:12px;margin:24px 0}
.tile{background:var(--surface);border-radius:10px;padding:24px;cursor:pointer;min-width:110px;text-align:center}
#chat-btn{margin-top:16px;width:100%;padding:8px;border:none;border-radius:6px;background:var(--accent);color:#fff;cursor:pointer}
#history-list{list-style:none;color:var(--surface)}
#history-list li{padding:3px 0;cursor:pointer;font-size:13px}
"#;

    let js = r#"
var engines = {
  google: 'https://www.google.com/search?q=',
  bing: 'https://www.bing.com/search?q=',
  yahoo: 'https://search.yahoo.com/search?p='
};
var currentEngine = 'bing';

document.querySelectorAll('.engine-button').forEach(function(b){
  b.addEventListener('click', function(){
    document.querySelectorAll('.engine-button').forEach(function(x){x.classList.remove('active')});
    b.classList.add('active');
    currentEngine = b.dataset.engine;
  });
});

function navigate(url){ __an_call({cmd:'navigate', url:url}); }

document.getElementById('search-input').addEventListener('keydown', function(e){
  if (e.key !== 'Enter') return;
  var q = e.target.value.trim();
  if (!q) return;
  if (/^https?:\/\//i.test(q)) navigate(q);
  else if (q.indexOf('.') !== -1 && q.indexOf(' ') === -1) navigate('https://' + q);
  else navigate(engines[currentEngine] + encodeURIComponent(q));
});

document.querySelectorAll('.tile').forEach(function(t){
  t.addEventListener('click', function(){ navigate(t.dataset.url); });
});

document.getElementById('nav-back').addEventListener('click', function(){ __an_call({cmd:'go-back'}); });
document.getElementById('nav-forward').addEventListener('click', function(){ __an_call({cmd:'go-forward'}); });
document.getElementById('nav-reload').addEventListener('click', function(){ __an_call({cmd:'reload'}); });
document.getElementById('nav-home').addEventListener('click', function(){ __an_call({cmd:'hide-browsing-surface'}); });
document.getElementById('chat-btn').addEventListener('click', function(){
  __an_call({cmd:'open-chat-window'}).then(function(r){
    if (!r.ok) alert(r.error || 'Could not open chatroom');
  });
});

window.__an_setAddress = function(url){ document.getElementById('address').value = url; };
window.__an_renderRecent = function(urls){
  var ul = document.getElementById('recent-list');
  ul.innerHTML = '';
  urls.forEach(function(u){
    var li = document.createElement('li');
    li.textContent = u;
    li.addEventListener('click', function(){ navigate(u); });
    ul.appendChild(li);
  });
};

function renderBookmarks(items){
  var ul = document.getElementById('bookmark-list');
  ul.innerHTML = '';
  items.forEach(function(b){
    var li = document.createElement('li');
    li.textContent = b.title;
    li.title = b.url;
    li.addEventListener('click', function(){ navigate(b.url); });
    ul.appendChild(li);
  });
}

function renderHistory(items){
  var ul = document.getElementById('history-list');
  ul.innerHTML = '';
  items.slice(0, 20).forEach(function(h){
    var li = document.createElement('li');
    li.textContent = h.title + ' — ' + h.url;
    li.addEventListener('click', function(){ navigate(h.url); });
    ul.appendChild(li);
  });
}

__an_on('url-updated', function(url){ __an_setAddress(url); });

__an_call({cmd:'get-bookmarks'}).then(function(r){ if (r.ok) renderBookmarks(r.data); });
__an_call({cmd:'get-history'}).then(function(r){ if (r.ok) renderHistory(r.data); });
"#;

    let bridge = bridge_js();
    let mut html = String::with_capacity(body.len() + css.len() + js.len() + bridge.len() + 256);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(css);
    html.push_str("</style></head><body>");
    html.push_str(body);
    html.push_str("<script>");
    html.push_str(&bridge);
    html.push_str(js);
    html.push_str("</script></body></html>");
    html
}

// ─── IPC handler ───

/// Handles one raw IPC message from the WebView.
///
/// Requests outside the closed Control Channel set and signals outside the
/// surface instrumentation set are protocol violations: dropped, logged,
/// never dispatched.
fn handle_ipc(
    app: &Mutex<App>,
    surface: &EventLoopSurface,
    proxy: &EventLoopProxy<UserEvent>,
    body: &str,
) {
    let raw: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            debug!("Dropping unparsable IPC message: {}", e);
            return;
        }
    };

    if raw.get("cmd").is_some() {
        let id = raw.get("id").cloned().unwrap_or(serde_json::Value::Null);
        let request = match serde_json::from_value::<ChannelRequest>(raw) {
            Ok(r) => r,
            Err(_) => {
                debug!("Dropping unrecognized channel request");
                return;
            }
        };
        info!("[channel] {}", request.name());
        let response = channel_handler::handle_request(app, surface, request);
        deliver_response(proxy, &id, &response);
        return;
    }

    match SurfaceSignal::parse(body) {
        Some(signal) => {
            let a = match app.lock() {
                Ok(a) => a,
                Err(e) => {
                    error!("App state poisoned: {}", e);
                    return;
                }
            };
            // Only honored for the page the surface actually committed.
            a.observe_surface_signal(&signal);
        }
        None => debug!("Dropping unrecognized IPC message"),
    }
}

/// Resolves the UI's pending promise for request `id`.
fn deliver_response(proxy: &EventLoopProxy<UserEvent>, id: &serde_json::Value, response: &ChannelResponse) {
    if id.is_null() {
        return;
    }
    let payload = match serde_json::to_string(response) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to serialize channel response: {}", e);
            return;
        }
    };
    let _ = proxy.send_event(UserEvent::EvalScript(format!(
        "if(window.__an_resolve)__an_resolve({}, {})",
        id, payload
    )));
}

/// Delivers a host event to the UI's subscription bridge.
fn deliver_event(proxy: &EventLoopProxy<UserEvent>, event: &HostEvent) {
    let payload = match event {
        HostEvent::UrlUpdated { url } => serde_json::to_string(url).unwrap_or_default(),
    };
    let _ = proxy.send_event(UserEvent::EvalScript(format!(
        "if(window.__an_emit)__an_emit('{}', {})",
        event.channel_name(),
        payload
    )));
}

// ─── Helpers ───

/// Host-side safety net behind the homepage's own input handling: scheme-less
/// domains get `https://`, anything else becomes a Bing search.
fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return HOMEPAGE_URL.to_string();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with("an://") {
        return trimmed.to_string();
    }
    if trimmed.contains('.') && !trimmed.contains(' ') {
        return format!("https://{}", trimmed);
    }
    let mut query = String::with_capacity(trimmed.len() * 3);
    for b in trimmed.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                query.push(b as char);
            }
            b' ' => query.push('+'),
            _ => {
                query.push('%');
                query.push(char::from(b"0123456789ABCDEF"[(b >> 4) as usize]));
                query.push(char::from(b"0123456789ABCDEF"[(b & 0xf) as usize]));
            }
        }
    }
    format!("https://www.bing.com/search?q={}", query)
}

fn build_webview(builder: WebViewBuilder, window: &Window) -> wry::Result<WebView> {
    #[cfg(target_os = "linux")]
    {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox)
    }
    #[cfg(not(target_os = "linux"))]
    {
        builder.build(window)
    }
}

// ─── Main entry point ───

pub fn run() {
    let mut app = App::new();
    app.startup();
    let app = Arc::new(Mutex::new(app));

    let mut shell = ShellState {
        ribbon: RecentRibbon::new(),
    };

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Anechoic")
        .with_inner_size(tao::dpi::LogicalSize::new(1200.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");
    let main_window_id = window.id();

    let ipc_app = app.clone();
    let ipc_proxy = proxy.clone();
    let ipc_surface = EventLoopSurface { proxy: proxy.clone() };
    let pl_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("an".into(), move |_wv_id, request| {
            let html = match request.uri().path() {
                "/home" | "/" => homepage_html(),
                _ => homepage_html(),
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_initialization_script(&bridge_js())
        .with_url(HOMEPAGE_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            handle_ipc(&ipc_app, &ipc_surface, &ipc_proxy, msg.body().as_str());
        })
        .with_on_page_load_handler(move |event, url| {
            if let PageLoadEvent::Finished = event {
                let _ = pl_proxy.send_event(UserEvent::NavigationCommitted(url));
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    let webview = build_webview(builder, &window).expect("Failed to create WebView");

    // Live chat window handle; None means the next open creates a fresh one.
    let mut chat: Option<(Window, WebView)> = None;
    let loop_app = app.clone();
    let loop_proxy = proxy;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id,
                ..
            } => {
                if chat_window_id(&chat) == Some(window_id) {
                    chat = None;
                    if let Ok(mut a) = loop_app.lock() {
                        a.mark_chat_window_closed();
                    }
                } else if window_id == main_window_id {
                    if let Ok(mut a) = loop_app.lock() {
                        a.shutdown();
                    }
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    info!("[load] {}", url);
                    if let Err(e) = webview.load_url(&url) {
                        warn!("Failed to load {}: {}", url, e);
                    }
                }

                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }

                UserEvent::NavigationCommitted(url) => {
                    // Internal homepage loads are not navigations of the
                    // browsing surface.
                    if url.starts_with("an://") {
                        return;
                    }
                    if let Ok(mut a) = loop_app.lock() {
                        a.history.record_visit(None, &url);
                        a.note_navigation(&url);
                    }
                    shell.ribbon.push(&url);
                    deliver_event(&loop_proxy, &HostEvent::UrlUpdated { url });
                    if let Ok(ribbon_json) = serde_json::to_string(shell.ribbon.urls()) {
                        let _ = loop_proxy.send_event(UserEvent::EvalScript(format!(
                            "if(window.__an_renderRecent)__an_renderRecent({})",
                            ribbon_json
                        )));
                    }
                }

                UserEvent::OpenChatWindow(url) => {
                    if chat.is_some() {
                        if let Some((w, _)) = &chat {
                            w.set_focus();
                        }
                        return;
                    }
                    // On failure the open flag must be cleared again, or every
                    // later open-chat-window would focus a window that does
                    // not exist.
                    let chat_window = match WindowBuilder::new()
                        .with_title("Chatroom")
                        .with_inner_size(tao::dpi::LogicalSize::new(900.0, 700.0))
                        .build(target)
                    {
                        Ok(w) => w,
                        Err(e) => {
                            error!("Failed to create chat window: {}", e);
                            if let Ok(mut a) = loop_app.lock() {
                                a.mark_chat_window_closed();
                            }
                            return;
                        }
                    };
                    match build_webview(WebViewBuilder::new().with_url(&url), &chat_window) {
                        Ok(wv) => chat = Some((chat_window, wv)),
                        Err(e) => {
                            error!("Failed to create chat WebView: {}", e);
                            if let Ok(mut a) = loop_app.lock() {
                                a.mark_chat_window_closed();
                            }
                        }
                    }
                }

                UserEvent::FocusChatWindow => {
                    if let Some((w, _)) = &chat {
                        w.set_focus();
                    }
                }
            },

            _ => {}
        }
    });
}

fn chat_window_id(chat: &Option<(Window, WebView)>) -> Option<WindowId> {
    chat.as_ref().map(|(w, _)| w.id())
}
