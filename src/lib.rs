//! Anechoic — a customizable homepage shell with an embedded browsing surface
//! and a companion chat window.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod channel_handler;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
