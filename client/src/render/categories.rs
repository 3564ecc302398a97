//! Category manager list.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use super::{Entry, PlaceholderText, entries};
use crate::net::types::Category;
use crate::state::dashboard::LoadState;

pub const TEXT: PlaceholderText = PlaceholderText {
    loading: "Loading categories...",
    failed: "Failed to load categories",
    empty: "No categories found. Add your first category above.",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub key: i64,
    pub name: String,
    pub description: String,
    pub class: String,
}

#[must_use]
pub fn row(category: &Category) -> CategoryRow {
    CategoryRow {
        key: category.category_id,
        name: category.category_name.clone(),
        description: category
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or("No description")
            .to_owned(),
        class: format!("category-badge {}", category.css_class()),
    }
}

#[must_use]
pub fn rows(load: &LoadState<Category>) -> Vec<Entry<CategoryRow>> {
    entries(load, &TEXT, row)
}
