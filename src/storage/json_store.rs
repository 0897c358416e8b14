//! JSON-backed persistent store for Anechoic.
//!
//! Maps a logical store name to one pretty-printed JSON array file in the
//! application-private data directory. Reads degrade to an empty list on a
//! missing or corrupt file (logged, never raised); writes replace the full
//! sequence and go through a temp file + rename so a crash mid-write cannot
//! truncate the previous contents.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::platform;
use crate::types::errors::StoreError;

/// The closed set of logical stores. Each maps to exactly one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreName {
    History,
    Bookmarks,
}

impl StoreName {
    /// File name of the backing store inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            StoreName::History => "history.json",
            StoreName::Bookmarks => "bookmarks.json",
        }
    }
}

/// Store rooted at a data directory, one JSON array file per logical name.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at the platform data directory.
    /// `ANECHOIC_DATA_DIR` overrides the location when set.
    pub fn new() -> Self {
        let data_dir = match std::env::var("ANECHOIC_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => platform::get_data_dir(),
        };
        Self { data_dir }
    }

    /// Creates a store rooted at an explicit directory. Used by tests.
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self { data_dir: dir.as_ref().to_path_buf() }
    }

    /// The directory holding the backing files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn file_path(&self, name: StoreName) -> PathBuf {
        self.data_dir.join(name.file_name())
    }

    /// Reads the full record sequence for `name`.
    ///
    /// A missing file is a normal first-run condition and yields an empty
    /// list. An unreadable or unparsable file also yields an empty list —
    /// the failure is logged but never raised to the caller.
    pub fn read<T: DeserializeOwned>(&self, name: StoreName) -> Vec<T> {
        let path = self.file_path(name);
        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read {}: {}", name.file_name(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to parse {}: {}", name.file_name(), e);
                Vec::new()
            }
        }
    }

    /// Replaces the full record sequence for `name` on disk.
    ///
    /// Creates the data directory if needed, serializes pretty-printed, and
    /// writes via a sibling temp file followed by a rename.
    pub fn write<T: Serialize>(&self, name: StoreName, records: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StoreError::Io(format!("Failed to create data directory: {}", e)))?;

        let json = serde_json::to_string_pretty(records).map_err(|e| {
            StoreError::Serialization(format!("Failed to serialize {}: {}", name.file_name(), e))
        })?;

        let path = self.file_path(name);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", name.file_name(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Io(format!("Failed to replace {}: {}", name.file_name(), e)))?;

        Ok(())
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new()
    }
}
