use std::fmt;

// === StoreError ===

/// Errors related to the JSON-backed persistent store.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(String),
    /// Serializing or deserializing the record list failed.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Store I/O error: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Store serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === BookmarkError ===

/// Errors related to bookmark operations.
///
/// The `Display` strings are part of the Control Channel contract — the UI
/// matches on them verbatim, so they must stay stable.
#[derive(Debug)]
pub enum BookmarkError {
    /// A bookmark with the same URL already exists.
    DuplicateUrl(String),
    /// The request carried no URL.
    MissingUrl,
    /// Persisting the bookmark list failed.
    Store(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::DuplicateUrl(_) => write!(f, "Bookmark already exists"),
            BookmarkError::MissingUrl => write!(f, "URL is required"),
            BookmarkError::Store(msg) => write!(f, "Bookmark store error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === ChatError ===

/// Errors related to the companion chat service subprocess.
#[derive(Debug)]
pub enum ChatError {
    /// Spawning the chat service process failed.
    Spawn(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Spawn(msg) => write!(f, "Failed to start chat service: {}", msg),
        }
    }
}

impl std::error::Error for ChatError {}
