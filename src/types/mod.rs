// Anechoic shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod channel;
pub mod errors;
pub mod history;
