// Anechoic platform abstraction
// Provides the platform-specific application data directory for Windows,
// macOS, and Linux, selected at compile time via `cfg(target_os)`.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific data directory for Anechoic.
///
/// - **Linux**: `~/.local/share/anechoic` (or `$XDG_DATA_HOME/anechoic`)
/// - **macOS**: `~/Library/Application Support/Anechoic`
/// - **Windows**: `%APPDATA%/Anechoic`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
