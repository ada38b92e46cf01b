//! # Menu Board
//!
//! The state container between the menu-items collection and whatever renders the menu.
//!
//! A [`MenuBoard`] subscribes to the collection and, for every snapshot the store pushes,
//! rebuilds a complete [`MenuView`] from that snapshot alone: items sorted by display order,
//! category groups, and sequential numbers. Views are immutable and published through a
//! `tokio::sync::watch` channel, so readers always see one whole snapshot's worth of derived
//! state and never a partially updated one.
//!
//! ```rust
//! use menu_engine::board::{Audience, MenuBoard};
//! use menu_engine::clients::MenuClient;
//! use menu_engine::menu_actor;
//! use menu_engine::model::MenuItemCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, store) = menu_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let mut board = MenuBoard::attach(&store, Audience::Customer).await?;
//!     assert!(board.current().is_empty());
//!
//!     MenuClient::new(store)
//!         .add_item(MenuItemCreate::new("Desserts", "Baklava", "Pistachio and honey"))
//!         .await?;
//!
//!     let view = board.changed().await.expect("board closed");
//!     assert_eq!(view.items().len(), 1);
//!     Ok(())
//! }
//! ```

use crate::error::MenuError;
use crate::menu_actor::COLLECTION;
use crate::model::{MenuItem, MenuItemId};
use crate::ordering::{
    filter_items, group_by_category, sequential_numbers, sort_by_display_order, CategoryFilter,
    CategoryGroups, CategoryKey, CategoryNumber,
};
use doc_store::{DocumentStore, Snapshot};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Who the view is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Active items only.
    Customer,
    /// Every item, active or not.
    Manager,
}

impl Audience {
    fn admits(self, item: &MenuItem) -> bool {
        match self {
            Audience::Customer => item.is_active,
            Audience::Manager => true,
        }
    }
}

/// An item with its derived display number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedItem {
    pub number: usize,
    pub item: MenuItem,
}

/// One rendered category block.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub key: CategoryKey,
    pub category_number: CategoryNumber,
    pub entries: Vec<NumberedItem>,
}

/// Everything derived from one snapshot for one audience.
#[derive(Debug, Clone)]
pub struct MenuView {
    version: u64,
    audience: Audience,
    items: Vec<MenuItem>,
    groups: CategoryGroups,
    numbers: HashMap<MenuItemId, usize>,
}

impl MenuView {
    pub fn from_snapshot(snapshot: &Snapshot<MenuItem>, audience: Audience) -> Self {
        Self::from_items(snapshot.version, &snapshot.documents, audience)
    }

    /// Build a view from a complete item list in document order.
    pub fn from_items(version: u64, documents: &[MenuItem], audience: Audience) -> Self {
        let mut items: Vec<MenuItem> = documents
            .iter()
            .filter(|item| audience.admits(item))
            .cloned()
            .collect();
        sort_by_display_order(&mut items);
        let groups = group_by_category(&items);
        let numbers = sequential_numbers(&items);
        Self {
            version,
            audience,
            items,
            groups,
            numbers,
        }
    }

    /// Snapshot version this view was built from.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    /// Visible items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn groups(&self) -> &CategoryGroups {
        &self.groups
    }

    pub fn number_of(&self, id: &MenuItemId) -> Option<usize> {
        self.numbers.get(id).copied()
    }

    /// The slice of the list a manager drags within when a category filter is applied.
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<MenuItem> {
        filter_items(&self.items, filter)
    }

    /// Category blocks in category-number order, each item tagged with its number.
    pub fn sections(&self) -> Vec<MenuSection> {
        self.groups
            .sorted()
            .into_iter()
            .map(|(key, group)| MenuSection {
                key: key.clone(),
                category_number: group.category_number.clone(),
                entries: group
                    .items
                    .iter()
                    .map(|item| NumberedItem {
                        number: self.numbers.get(&item.id).copied().unwrap_or_default(),
                        item: item.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Live [`MenuView`] for one audience.
///
/// Dropping the board stops its background task.
pub struct MenuBoard {
    receiver: watch::Receiver<Arc<MenuView>>,
    task: JoinHandle<()>,
}

impl MenuBoard {
    /// Subscribe to `store` and build the first view before returning.
    pub async fn attach<S>(store: &S, audience: Audience) -> Result<Self, MenuError>
    where
        S: DocumentStore<MenuItem> + ?Sized,
    {
        let operation = format!("{COLLECTION}.subscribe");
        let mut subscription = store
            .subscribe()
            .await
            .map_err(|e| MenuError::persistence(&operation, e))?;
        let first = subscription
            .next()
            .await
            .ok_or_else(|| MenuError::persistence(&operation, "collection closed"))?;

        let (sender, receiver) = watch::channel(Arc::new(MenuView::from_snapshot(&first, audience)));
        info!(?audience, version = first.version, "Menu board attached");

        let task = tokio::spawn(async move {
            while let Some(snapshot) = subscription.next().await {
                let view = MenuView::from_snapshot(&snapshot, audience);
                debug!(?audience, version = view.version(), items = view.items().len(), "View rebuilt");
                if sender.send(Arc::new(view)).is_err() {
                    break;
                }
            }
            debug!(?audience, "Menu board feed ended");
        });

        Ok(Self { receiver, task })
    }

    /// The latest view.
    pub fn current(&self) -> Arc<MenuView> {
        self.receiver.borrow().clone()
    }

    /// Wait for a view newer than the last one seen through this board.
    ///
    /// Returns `None` once the collection has shut down.
    pub async fn changed(&mut self) -> Option<Arc<MenuView>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Wait until the view reflects at least snapshot `version`.
    pub async fn wait_for(&mut self, version: u64) -> Option<Arc<MenuView>> {
        self.receiver
            .wait_for(|view| view.version() >= version)
            .await
            .ok()
            .map(|view| view.clone())
    }

    /// Another handle on the same view feed.
    pub fn watch(&self) -> watch::Receiver<Arc<MenuView>> {
        self.receiver.clone()
    }
}

impl Drop for MenuBoard {
    fn drop(&mut self) {
        self.task.abort();
    }
}
