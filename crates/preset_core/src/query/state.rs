//! Browsing state owned by a single view.

use crate::catalog::Catalog;
use crate::models::{Template, ALL_CATEGORIES};

use super::engine::filter;

/// The search text and selected category of one browsing view.
///
/// Each setter is one input event. Results are re-derived on every call to
/// [`SearchState::results`]; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    selected_category: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl SearchState {
    /// Empty query, "All" selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty query with the given category pre-selected.
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            query: String::new(),
            selected_category: category.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "Search query changed");
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Select a category button by label.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        tracing::debug!(category = %self.selected_category, "Category selected");
    }

    /// Templates to display for the current state, in catalog order.
    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Template> {
        let results = filter(catalog.templates(), &self.query, &self.selected_category);
        tracing::trace!(
            query = %self.query,
            category = %self.selected_category,
            matched = results.len(),
            "Filter re-derived"
        );
        results
    }

    /// Whether the view should show the empty-state message.
    pub fn is_empty_state(&self, catalog: &Catalog) -> bool {
        self.results(catalog).is_empty()
    }
}
