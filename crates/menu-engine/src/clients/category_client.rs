//! # Category Client
//!
//! Manages the saved-category list the manager picks from. Category identity is the normalized
//! key, so every check here is case-insensitive.
use crate::category_actor::COLLECTION;
use crate::clients::store_client::StoreClient;
use crate::error::MenuError;
use crate::model::{Category, CategoryCreate, CategoryId, MenuItem};
use crate::ordering::{category_names, normalize_category_key};
use doc_store::{CollectionClient, DocumentStore, StoreError};
use tracing::{debug, info, instrument};

/// Client for the categories collection.
#[derive(Clone)]
pub struct CategoryClient<S = CollectionClient<Category>> {
    store: S,
}

impl<S: DocumentStore<Category>> StoreClient<Category> for CategoryClient<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn collection(&self) -> &'static str {
        COLLECTION
    }
}

impl<S: DocumentStore<Category>> CategoryClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved categories in document order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Category>, MenuError> {
        self.fetch_all().await
    }

    /// Save a new category.
    ///
    /// The name is trimmed and checked against both saved categories and the categories already
    /// used by `items`; a case-insensitive match is [`MenuError::DuplicateCategory`] and nothing
    /// is written.
    #[instrument(skip(self, items), fields(name = %params.name))]
    pub async fn add_category(
        &self,
        mut params: CategoryCreate,
        items: &[MenuItem],
    ) -> Result<CategoryId, MenuError> {
        params.name = params.name.trim().to_string();
        params.validate()?;

        let saved = self.fetch_all().await?;
        let key = normalize_category_key(&params.name);
        if let Some(existing) = category_names(&saved, items)
            .into_iter()
            .find(|name| normalize_category_key(name) == key)
        {
            debug!(%existing, "Duplicate category rejected");
            return Err(MenuError::DuplicateCategory(existing));
        }

        let name = params.name.clone();
        match self.store.insert(params).await {
            Ok(id) => {
                info!(category_id = %id, "Category added");
                Ok(id)
            }
            // Lost a race with a concurrent insert of the same name.
            Err(StoreError::Conflict(_)) => Err(MenuError::DuplicateCategory(name)),
            Err(e) => Err(self.map_error("insert", e)),
        }
    }

    /// Delete every saved category whose name matches `name` case-insensitively.
    ///
    /// Items that use the category are left alone. Returns how many categories were removed.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, name: &str) -> Result<usize, MenuError> {
        let key = normalize_category_key(name);
        let matching: Vec<CategoryId> = self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|category| normalize_category_key(&category.name) == key)
            .map(|category| category.id)
            .collect();

        for id in &matching {
            self.delete(id.clone()).await?;
        }
        info!(category = %key, removed = matching.len(), "Category deleted");
        Ok(matching.len())
    }
}
