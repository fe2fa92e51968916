//! Search bar: name search plus category dropdown.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// Dropdown label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All categories";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub term: String,
    pub category: Option<String>,
}

impl ItemFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: None,
        }
    }

    /// Select a category. Blank or [`ALL_CATEGORIES`] clears the filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        let trimmed = category.trim();
        self.category = if trimmed.is_empty() || trimmed == ALL_CATEGORIES {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.category.is_none()
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(category) = &self.category {
            if item.resolved_category() != category.as_str() {
                return false;
            }
        }

        let term = self.term.trim();
        term.is_empty() || item.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Matching items, input order kept.
    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Distinct resolved categories, sorted, for the dropdown.
pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    items
        .iter()
        .map(|i| i.resolved_category())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ItemId;

    fn items() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new(ItemId::new(1), "Bath Towel").with_category("Linen"),
            InventoryItem::new(ItemId::new(2), "Hand towel").with_category("Linen"),
            InventoryItem::new(ItemId::new(3), "Towel rail").with_category("Hardware"),
            InventoryItem::new(ItemId::new(4), "Light bulb"),
        ]
    }

    fn names<'a>(found: &[&'a InventoryItem]) -> Vec<&'a str> {
        found.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn term_matches_case_insensitively() {
        let items = items();
        let found = ItemFilter::new(" TOWEL ").apply(&items);
        assert_eq!(names(&found), vec!["Bath Towel", "Hand towel", "Towel rail"]);
    }

    #[test]
    fn category_narrows_the_search() {
        let items = items();
        let found = ItemFilter::new("towel").with_category("Linen").apply(&items);
        assert_eq!(names(&found), vec!["Bath Towel", "Hand towel"]);

        let found = ItemFilter::default().with_category("Uncategorized").apply(&items);
        assert_eq!(names(&found), vec!["Light bulb"]);
    }

    #[test]
    fn all_categories_clears_the_category() {
        let filter = ItemFilter::default().with_category(ALL_CATEGORIES);
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&items()).len(), 4);
    }

    #[test]
    fn dropdown_lists_distinct_sorted_categories() {
        assert_eq!(categories(&items()), vec!["Hardware", "Linen", "Uncategorized"]);
    }
}
