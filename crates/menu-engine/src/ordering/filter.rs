use super::category::{normalize_category_key, CategoryKey};
use crate::model::{Category, MenuItem};
use std::collections::HashMap;

/// Category scope for the manager's item list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryKey),
}

impl CategoryFilter {
    /// `"All"` (any case) or blank selects everything; anything else names one category.
    ///
    /// A category literally named "All" is therefore unreachable through `parse`; build
    /// `CategoryFilter::Category(normalize_category_key("All"))` directly to select it.
    pub fn parse(selection: &str) -> Self {
        let trimmed = selection.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Category(normalize_category_key(trimmed))
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(key) => &item.category_key() == key,
        }
    }
}

/// Items the filter admits, in input order.
pub fn filter_items(items: &[MenuItem], filter: &CategoryFilter) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Category names for the picker.
///
/// Saved categories come first, then item categories, so a saved spelling wins over an item's.
/// Names that normalize to the same key appear once; the result is sorted by key.
pub fn category_names(saved: &[Category], items: &[MenuItem]) -> Vec<String> {
    let mut seen: HashMap<CategoryKey, String> = HashMap::new();
    let labels = saved
        .iter()
        .map(|c| c.name.as_str())
        .chain(items.iter().map(|i| i.category.as_str()));
    for label in labels {
        if label.trim().is_empty() {
            continue;
        }
        seen.entry(normalize_category_key(label))
            .or_insert_with(|| label.trim().to_string());
    }
    let mut names: Vec<(CategoryKey, String)> = seen.into_iter().collect();
    names.sort_by(|(a, _), (b, _)| a.cmp(b));
    names.into_iter().map(|(_, name)| name).collect()
}

/// Item count per category key.
pub fn category_counts(items: &[MenuItem]) -> HashMap<CategoryKey, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.category_key()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryId;
    use crate::ordering::fixtures::item;

    fn saved(id: u32, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            subtitle: None,
            category_number: None,
            display_order: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_parse_all_and_named() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(" Wraps"),
            CategoryFilter::Category(normalize_category_key("wraps"))
        );
    }

    #[test]
    fn test_category_named_all_needs_explicit_filter() {
        let items = vec![item(1, "All", None, 0), item(2, "wraps", None, 1)];
        assert_eq!(filter_items(&items, &CategoryFilter::parse("all")).len(), 2);

        let only_all = CategoryFilter::Category(normalize_category_key("All"));
        let ids: Vec<u32> = filter_items(&items, &only_all).iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![
            item(1, "Burgers", None, 0),
            item(2, "wraps", None, 1),
            item(3, "BURGERS", None, 2),
        ];
        let burgers = filter_items(&items, &CategoryFilter::parse("burgers"));
        let ids: Vec<u32> = burgers.iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filter_items(&items, &CategoryFilter::All).len(), 3);
    }

    #[test]
    fn test_blank_category_filters_as_other() {
        let items = vec![item(1, "", None, 0), item(2, "sides", None, 1)];
        let other = filter_items(&items, &CategoryFilter::parse("Other"));
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].id.0, 1);
    }

    #[test]
    fn test_category_names_dedupe_and_prefer_saved_spelling() {
        let categories = vec![saved(1, "Wraps"), saved(2, "BURGERS")];
        let items = vec![
            item(1, "burgers", None, 0),
            item(2, "Rice Dishes", None, 1),
            item(3, "rice dishes", None, 2),
            item(4, "  ", None, 3),
        ];
        assert_eq!(
            category_names(&categories, &items),
            vec!["BURGERS", "Rice Dishes", "Wraps"]
        );
    }

    #[test]
    fn test_category_counts_by_key() {
        let items = vec![
            item(1, "Burgers", None, 0),
            item(2, "burgers", None, 1),
            item(3, "wraps", None, 2),
        ];
        let counts = category_counts(&items);
        assert_eq!(counts[&normalize_category_key("burgers")], 2);
        assert_eq!(counts[&normalize_category_key("WRAPS")], 1);
    }
}
