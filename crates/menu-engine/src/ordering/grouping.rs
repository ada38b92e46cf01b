use super::category::{CategoryKey, CategoryNumber};
use crate::model::MenuItem;
use std::collections::HashMap;

/// Items sharing one category key.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    /// Taken from the first item seen for the key.
    pub category_number: CategoryNumber,
    /// In input order.
    pub items: Vec<MenuItem>,
}

/// Result of [`group_by_category`].
///
/// Lookup is by key. Rendering must go through [`CategoryGroups::sorted`], which enumerates
/// groups by category number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups {
    groups: HashMap<CategoryKey, CategoryGroup>,
}

impl CategoryGroups {
    pub fn get(&self, key: &CategoryKey) -> Option<&CategoryGroup> {
        self.groups.get(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups by ascending category number, ties broken by key.
    pub fn sorted(&self) -> Vec<(&CategoryKey, &CategoryGroup)> {
        let mut groups: Vec<_> = self.groups.iter().collect();
        groups.sort_by(|(key_a, a), (key_b, b)| {
            a.category_number
                .cmp(&b.category_number)
                .then_with(|| key_a.cmp(key_b))
        });
        groups
    }

    /// Keys in render order.
    pub fn sorted_keys(&self) -> Vec<&CategoryKey> {
        self.sorted().into_iter().map(|(key, _)| key).collect()
    }

    /// Every item, group by group in render order.
    pub fn flatten(&self) -> Vec<MenuItem> {
        self.sorted()
            .into_iter()
            .flat_map(|(_, group)| group.items.iter().cloned())
            .collect()
    }
}

/// Group items by normalized category.
///
/// The first item seen for a key fixes the group's category number. Later items keep their own
/// `category_number` field but it does not affect group order.
pub fn group_by_category(items: &[MenuItem]) -> CategoryGroups {
    let mut groups: HashMap<CategoryKey, CategoryGroup> = HashMap::new();
    for item in items {
        groups
            .entry(item.category_key())
            .or_insert_with(|| CategoryGroup {
                category_number: item.category_number(),
                items: Vec::new(),
            })
            .items
            .push(item.clone());
    }
    CategoryGroups { groups }
}
