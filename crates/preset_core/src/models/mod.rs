//! Data models for OBS Setup Presets.
//!
//! This module contains the core data structures:
//! - `Category` and the "All" pseudo-category used by the filter
//! - `Template`, the preset record shown as a card
//! - Parsed views of the display strings (`Resolution`, `Bitrate`)

mod enums;
mod error;
mod template;

pub use enums::{category_labels, Category, ALL_CATEGORIES};
pub use error::{ModelError, ModelResult};
pub use template::{Bitrate, Resolution, Template};
