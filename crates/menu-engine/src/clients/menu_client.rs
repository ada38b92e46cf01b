//! # Menu Client
//!
//! High-level operations on menu items: adding, editing, toggling visibility, and persisting
//! drag-and-drop reorders. Works against any [`DocumentStore<MenuItem>`], which in production is
//! the menu-items [`CollectionClient`] and in tests a mock collection.
use crate::clients::store_client::StoreClient;
use crate::error::MenuError;
use crate::menu_actor::COLLECTION;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemPatch};
use crate::ordering::{
    next_display_order, normalize_category_key, reorder_in_slots, sort_by_display_order,
    WritePlan,
};
use doc_store::{CollectionClient, DocumentStore};
use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

/// Client for the menu-items collection.
#[derive(Clone)]
pub struct MenuClient<S = CollectionClient<MenuItem>> {
    store: S,
}

impl<S: DocumentStore<MenuItem>> StoreClient<MenuItem> for MenuClient<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn collection(&self) -> &'static str {
        COLLECTION
    }
}

impl<S: DocumentStore<MenuItem>> MenuClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every item, sorted by display order.
    #[instrument(skip(self))]
    pub async fn items(&self) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self.fetch_all().await?;
        sort_by_display_order(&mut items);
        Ok(items)
    }

    /// Create an item at the end of the menu.
    ///
    /// The payload's `display_order` is ignored and replaced by one past the current maximum,
    /// read fresh from the store. Blank category, name or description is rejected before any
    /// store call.
    #[instrument(skip(self), fields(name = %params.name))]
    pub async fn add_item(&self, mut params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        params.validate()?;
        let existing = self.fetch_all().await?;
        params.display_order = next_display_order(&existing);
        debug!(display_order = params.display_order, "Sending request");
        let id = self
            .store
            .insert(params)
            .await
            .map_err(|e| self.map_error("insert", e))?;
        info!(item_id = %id, "Menu item added");
        Ok(id)
    }

    /// Insert an item exactly as given, keeping its `display_order`. Used for seeding.
    #[instrument(skip(self), fields(name = %params.name))]
    pub async fn import_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        params.validate()?;
        debug!("Sending request");
        self.store
            .insert(params)
            .await
            .map_err(|e| self.map_error("insert", e))
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, MenuError> {
        patch.validate()?;
        debug!("Sending request");
        self.store
            .update_fields(id, patch)
            .await
            .map_err(|e| self.map_error("update", e))
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: MenuItemId) -> Result<(), MenuError> {
        self.delete(id).await
    }

    /// Show or hide an item on the customer menu.
    #[instrument(skip(self))]
    pub async fn set_active(&self, id: MenuItemId, is_active: bool) -> Result<MenuItem, MenuError> {
        self.update_item(id, MenuItemPatch::active(is_active)).await
    }

    /// Flip an item's visibility and return the new state.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: MenuItemId) -> Result<bool, MenuError> {
        let current = self.get(id.clone()).await?.ok_or_else(|| {
            MenuError::persistence(format!("{COLLECTION}.get"), format!("{id} not found"))
        })?;
        let updated = self.set_active(id, !current.is_active).await?;
        Ok(updated.is_active)
    }

    /// Persist a reorder plan.
    ///
    /// All writes are issued at once and awaited together. If any fail, the error names every
    /// failed id; the writes that did succeed stay applied and nothing is retried.
    #[instrument(skip(self, plan), fields(writes = plan.len()))]
    pub async fn commit_reorder(&self, plan: &WritePlan) -> Result<(), MenuError> {
        if plan.is_empty() {
            debug!("Nothing to reorder");
            return Ok(());
        }
        let writes = plan.iter().map(|write| async move {
            let result = self
                .store
                .update_fields(
                    write.id.clone(),
                    MenuItemPatch::display_order(write.display_order),
                )
                .await;
            (write.id.clone(), result)
        });
        let results = join_all(writes).await;

        let failures: Vec<String> = results
            .into_iter()
            .filter_map(|(id, result)| result.err().map(|e| format!("{id} ({e})")))
            .collect();
        if failures.is_empty() {
            info!("Reorder committed");
            Ok(())
        } else {
            warn!(failed = failures.len(), "Reorder partially failed");
            Err(MenuError::persistence(
                format!("{COLLECTION}.reorder"),
                format!("failed to update {}", failures.join(", ")),
            ))
        }
    }

    /// Compute and persist a drag of `moved` onto `target` within `view`.
    ///
    /// `view` is the list the user was dragging in, in display order: the whole menu or one
    /// category of it. The view's items trade their existing display orders among themselves
    /// (see [`reorder_in_slots`]), so items outside the view are neither written nor moved.
    /// Returns the plan that was committed, which is empty for a no-op move.
    #[instrument(skip(self, view), fields(view_len = view.len()))]
    pub async fn reorder_view(
        &self,
        view: &[MenuItem],
        moved: &MenuItemId,
        target: &MenuItemId,
    ) -> Result<WritePlan, MenuError> {
        let plan = reorder_in_slots(view, moved, target);
        self.commit_reorder(&plan).await?;
        Ok(plan)
    }

    /// Set the category number on every item in `category`. Returns how many items were updated.
    #[instrument(skip(self))]
    pub async fn set_category_number(
        &self,
        category: &str,
        number: &str,
    ) -> Result<usize, MenuError> {
        let key = normalize_category_key(category);
        let targets: Vec<MenuItemId> = self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|item| item.category_key() == key)
            .map(|item| item.id)
            .collect();

        let writes = targets.iter().map(|id| {
            self.store
                .update_fields(id.clone(), MenuItemPatch::category_number(number))
        });
        let results = join_all(writes).await;

        let mut failed = Vec::new();
        for (id, result) in targets.iter().zip(results) {
            if let Err(e) = result {
                failed.push(format!("{id} ({e})"));
            }
        }
        if !failed.is_empty() {
            return Err(MenuError::persistence(
                format!("{COLLECTION}.set_category_number"),
                format!("failed to update {}", failed.join(", ")),
            ));
        }
        info!(category = %key, updated = targets.len(), "Category number set");
        Ok(targets.len())
    }
}
