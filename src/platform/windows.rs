// Anechoic platform paths for Windows
// Data: %APPDATA%/Anechoic

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Anechoic on Windows.
pub fn get_data_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\"));
    PathBuf::from(appdata).join("Anechoic")
}
