// Anechoic storage layer
// The host process owns all persistent state; the UI only ever sees copies
// returned over the Control Channel.

pub mod json_store;

pub use json_store::{JsonStore, StoreName};
