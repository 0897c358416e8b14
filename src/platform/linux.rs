// Anechoic platform paths for Linux
// Data: ~/.local/share/anechoic

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Anechoic on Linux.
/// Uses `$XDG_DATA_HOME/anechoic` if set, otherwise `~/.local/share/anechoic`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("anechoic")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("anechoic")
    }
}
