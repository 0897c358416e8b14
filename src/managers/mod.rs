// Anechoic state managers
// Managers handle stateful operations: history recording, bookmarks, and the
// homepage's recent-URL ribbon.

pub mod bookmark_manager;
pub mod history_recorder;
pub mod recent_ribbon;
