use crate::model::{MenuItem, MenuItemId};

/// One `display_order` write produced by [`reorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub id: MenuItemId,
    pub display_order: i64,
}

/// The full set of writes needed to persist a drag-and-drop move.
///
/// Every item in the reordered list gets a write, including items whose index did not change.
/// An empty plan means there is nothing to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WritePlan {
    writes: Vec<PlannedWrite>,
}

impl WritePlan {
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedWrite> {
        self.writes.iter()
    }

    /// `(id, display_order)` pairs in the new order.
    pub fn pairs(&self) -> Vec<(MenuItemId, i64)> {
        self.writes
            .iter()
            .map(|w| (w.id.clone(), w.display_order))
            .collect()
    }
}

impl IntoIterator for WritePlan {
    type Item = PlannedWrite;
    type IntoIter = std::vec::IntoIter<PlannedWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}

/// Move `moved` onto `target` and renumber the whole list.
///
/// `items` is the list as the user sees it, in display order. The moved item is removed and
/// reinserted at the target's original index, then every item gets its new index (from 0) as its
/// display order. Categories are not consulted, so the move may cross category boundaries; the
/// moved item keeps its own category and regroups on the next render.
///
/// The 0-based numbering is only safe when `items` is the complete menu. For a category-filtered
/// slice use [`reorder_in_slots`], which leaves items outside the slice untouched.
///
/// Returns an empty plan when `moved == target` or when either id is not in `items`.
pub fn reorder(items: &[MenuItem], moved: &MenuItemId, target: &MenuItemId) -> WritePlan {
    if moved == target {
        return WritePlan::default();
    }
    let from = items.iter().position(|item| &item.id == moved);
    let to = items.iter().position(|item| &item.id == target);
    let (Some(from), Some(to)) = (from, to) else {
        return WritePlan::default();
    };

    let mut ids: Vec<&MenuItemId> = items.iter().map(|item| &item.id).collect();
    let moved_id = ids.remove(from);
    ids.insert(to, moved_id);

    let writes = ids
        .into_iter()
        .enumerate()
        .map(|(index, id)| PlannedWrite {
            id: id.clone(),
            display_order: index as i64,
        })
        .collect();
    WritePlan { writes }
}

/// Like [`reorder`], but the rewritten items reuse the display orders they already hold.
///
/// `items` may be any slice of the menu, such as one category. Its existing display orders are
/// sorted and handed out again in the new sequence, so the slice keeps its positions relative to
/// every item outside it and those items need no writes. Repeated orders inside the slice are
/// bumped to keep the new sequence strictly increasing.
///
/// For a complete menu numbered `0..n` the result equals [`reorder`].
pub fn reorder_in_slots(items: &[MenuItem], moved: &MenuItemId, target: &MenuItemId) -> WritePlan {
    let plan = reorder(items, moved, target);
    if plan.is_empty() {
        return plan;
    }

    let mut slots: Vec<i64> = items.iter().map(|item| item.display_order).collect();
    slots.sort_unstable();
    for i in 1..slots.len() {
        if slots[i] <= slots[i - 1] {
            slots[i] = slots[i - 1] + 1;
        }
    }

    let writes = plan
        .into_iter()
        .zip(slots)
        .map(|(write, display_order)| PlannedWrite {
            id: write.id,
            display_order,
        })
        .collect();
    WritePlan { writes }
}
