//! Query engine and browsing state.
//!
//! This module provides:
//! - `filter`, the pure function combining text search and category selection
//! - `SearchState`, the two input fields a browsing view owns
//!
//! # Example
//!
//! ```
//! use preset_core::catalog::Catalog;
//! use preset_core::query::{filter, SearchState};
//!
//! let catalog = Catalog::builtin();
//! let hits = filter(catalog.templates(), "4k", "All");
//! assert_eq!(hits.len(), 1);
//!
//! let mut state = SearchState::new();
//! state.select_category("Streaming");
//! let ids: Vec<u32> = state.results(catalog).iter().map(|t| t.id).collect();
//! assert_eq!(ids, vec![1, 2, 5]);
//! ```

mod engine;
mod state;

pub use engine::{filter, matches_category, matches_query};
pub use state::SearchState;
