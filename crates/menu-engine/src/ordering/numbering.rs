use crate::model::{MenuItem, MenuItemId};
use std::collections::HashMap;

/// Number items 1, 2, 3, ... in the order given.
///
/// Callers pass the list already sorted by display order. The result is derived data: recompute
/// it whenever the list changes and never persist it.
pub fn sequential_numbers(items: &[MenuItem]) -> HashMap<MenuItemId, usize> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id.clone(), index + 1))
        .collect()
}

/// Stable ascending sort by display order. Equal orders keep their document order.
pub fn sort_by_display_order(items: &mut [MenuItem]) {
    items.sort_by_key(|item| item.display_order);
}

/// Display order for a newly created item: one past the current maximum, or 0 for an empty menu.
///
/// Gaps left by deletions are never filled.
pub fn next_display_order(items: &[MenuItem]) -> i64 {
    items
        .iter()
        .map(|item| item.display_order)
        .max()
        .map_or(0, |max| max + 1)
}
