//! Text and category filtering over a template slice.

use crate::models::{Template, ALL_CATEGORIES};

/// Select the templates matching both the text query and the category.
///
/// The query is a case-insensitive substring test against the title, the
/// description and each tag; an empty query matches everything. The category
/// is either [`ALL_CATEGORIES`] or an exact, case-sensitive label.
///
/// Catalog order is preserved. An unmatched query or unknown category yields
/// an empty result, never an error.
pub fn filter<'a>(catalog: &'a [Template], query: &str, category: &str) -> Vec<&'a Template> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|t| contains_needle(t, &needle) && matches_category(t, category))
        .collect()
}

/// Whether `query` occurs, ignoring case, in the title, description or a tag.
pub fn matches_query(template: &Template, query: &str) -> bool {
    contains_needle(template, &query.to_lowercase())
}

/// Whether the template passes the category selector.
pub fn matches_category(template: &Template, category: &str) -> bool {
    category == ALL_CATEGORIES || template.category.label() == category
}

// `needle` must already be lowercase.
fn contains_needle(template: &Template, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    template.title.to_lowercase().contains(needle)
        || template.description.to_lowercase().contains(needle)
        || template
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
