//! Preset Core - Backend logic for OBS Setup Presets
//!
//! This crate contains the template catalog, the query engine and the
//! settings layer with zero UI dependencies. It can be used by the terminal
//! browser or any other front-end.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod models;
pub mod query;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
