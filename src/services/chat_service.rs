//! Companion chat service for Anechoic.
//!
//! A spawn-once wrapper around the local chat backend (a Python process run
//! from a service directory). The host starts it best-effort on launch and
//! kills it on shutdown; the chat window simply loads the service's base URL.
//!
//! Configuration comes from the environment:
//! - `CHAT_SERVICE_URL` — full base URL, takes precedence.
//! - `CHAT_SERVICE_HOST` / `CHAT_SERVICE_PORT` — default `127.0.0.1:5000`.
//! - `CHAT_SERVICE_PYTHON` — interpreter, default `python`.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{info, warn};

use crate::types::errors::ChatError;

pub const DEFAULT_CHAT_HOST: &str = "127.0.0.1";
pub const DEFAULT_CHAT_PORT: &str = "5000";

/// Resolves the chat service base URL from the environment.
pub fn base_url_from_env() -> String {
    if let Ok(url) = env::var("CHAT_SERVICE_URL") {
        return url;
    }
    let host = env::var("CHAT_SERVICE_HOST").unwrap_or_else(|_| DEFAULT_CHAT_HOST.to_string());
    let port = env::var("CHAT_SERVICE_PORT").unwrap_or_else(|_| DEFAULT_CHAT_PORT.to_string());
    format!("http://{}:{}", host, port)
}

/// Process wrapper for the chat backend.
pub struct ChatService {
    base_url: String,
    service_dir: PathBuf,
    child: Option<Child>,
}

impl ChatService {
    /// Creates a service rooted at `service_dir` (the directory holding the
    /// backend's `main.py`), with the base URL resolved from the environment.
    pub fn new<P: AsRef<Path>>(service_dir: P) -> Self {
        Self {
            base_url: base_url_from_env(),
            service_dir: service_dir.as_ref().to_path_buf(),
            child: None,
        }
    }

    /// The URL the chat window loads.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true while the backend process is alive.
    pub fn is_running(&mut self) -> bool {
        match &mut self.child {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    /// Starts the backend process. A second call while the process is alive
    /// is a no-op.
    pub fn spawn(&mut self) -> Result<(), ChatError> {
        if self.is_running() {
            info!("Chat service already running");
            return Ok(());
        }

        let python = env::var("CHAT_SERVICE_PYTHON").unwrap_or_else(|_| "python".to_string());
        let child = Command::new(&python)
            .arg("main.py")
            .current_dir(&self.service_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ChatError::Spawn(e.to_string()))?;

        info!("Started chat service (pid {})", child.id());
        self.child = Some(child);
        Ok(())
    }

    /// Kills the backend process if it is still running.
    pub fn shutdown(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                warn!("Failed to kill chat service: {}", e);
            }
            let _ = child.wait();
        }
    }
}

impl Drop for ChatService {
    fn drop(&mut self) {
        self.shutdown();
    }
}
