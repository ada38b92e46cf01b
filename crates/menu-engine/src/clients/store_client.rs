use crate::error::MenuError;
use async_trait::async_trait;
use doc_store::{Document, DocumentStore, StoreError};

/// Shared reads and deletes for clients that wrap one collection.
///
/// Implementors provide the store and a collection name; the default methods translate every
/// [`StoreError`] into [`MenuError::PersistenceFailure`].
#[async_trait]
pub trait StoreClient<T: Document>: Send + Sync {
    type Store: DocumentStore<T>;

    fn store(&self) -> &Self::Store;

    /// Collection name, used as the operation prefix in errors.
    fn collection(&self) -> &'static str;

    fn map_error(&self, operation: &str, e: StoreError) -> MenuError {
        MenuError::persistence(format!("{}.{}", self.collection(), operation), e)
    }

    /// Fetch one document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, MenuError> {
        tracing::debug!("Sending request");
        self.store()
            .get(id)
            .await
            .map_err(|e| self.map_error("get", e))
    }

    /// Every document in document order.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<T>, MenuError> {
        tracing::debug!("Sending request");
        self.store()
            .fetch_all()
            .await
            .map_err(|e| self.map_error("fetch_all", e))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), MenuError> {
        tracing::debug!("Sending request");
        self.store()
            .delete(id)
            .await
            .map_err(|e| self.map_error("delete", e))
    }
}
