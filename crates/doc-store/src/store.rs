//! # DocumentStore Trait
//!
//! The seam between storage and everything above it. Engine-side clients are generic over
//! `DocumentStore<T>` so tests can hand them a mock collection instead of a running actor.
use crate::{CollectionClient, Document, StoreError, Subscription};
use async_trait::async_trait;

/// Operations a document collection must support.
///
/// # Example
///
/// ```rust
/// use doc_store::{CollectionActor, Document, DocumentStore};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NotePatch { text: Option<String> }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl Document for Note {
///     type Id = u32;
///     type Create = String;
///     type Patch = NotePatch;
///     type Error = NoteError;
///
///     fn from_create(id: u32, text: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, text })
///     }
///     fn apply_patch(&mut self, patch: NotePatch) -> Result<(), Self::Error> {
///         if let Some(text) = patch.text { self.text = text; }
///         Ok(())
///     }
/// }
///
/// async fn count<S: DocumentStore<Note>>(store: &S) -> usize {
///     store.fetch_all().await.map(|notes| notes.len()).unwrap_or(0)
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CollectionActor::<Note>::new("notes", 8);
///     tokio::spawn(actor.run());
///     client.insert("hello".to_string()).await.unwrap();
///     assert_eq!(count(&client).await, 1);
/// }
/// ```
#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Every document, in document (insertion) order.
    async fn fetch_all(&self) -> Result<Vec<T>, StoreError>;

    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Insert a new document and return the id the store assigned.
    async fn insert(&self, params: T::Create) -> Result<T::Id, StoreError>;

    /// Merge `patch` into one document and return the result.
    async fn update_fields(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError>;

    async fn delete(&self, id: T::Id) -> Result<(), StoreError>;

    /// Full snapshot now, then a full snapshot after every change.
    async fn subscribe(&self) -> Result<Subscription<T>, StoreError>;
}

#[async_trait]
impl<T: Document> DocumentStore<T> for CollectionClient<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, StoreError> {
        CollectionClient::fetch_all(self).await
    }

    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        CollectionClient::get(self, id).await
    }

    async fn insert(&self, params: T::Create) -> Result<T::Id, StoreError> {
        CollectionClient::insert(self, params).await
    }

    async fn update_fields(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        CollectionClient::update_fields(self, id, patch).await
    }

    async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        CollectionClient::delete(self, id).await
    }

    async fn subscribe(&self) -> Result<Subscription<T>, StoreError> {
        CollectionClient::subscribe(self).await
    }
}
