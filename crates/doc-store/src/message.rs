//! # Collection Messages
//!
//! The request type sent from a [`CollectionClient`](crate::CollectionClient) to its
//! [`CollectionActor`](crate::CollectionActor). Every variant carries a oneshot sender for the reply.
//!
//! The variants map onto the operations a document database exposes:
//!
//! - **FetchAll**: read the whole collection in document order.
//! - **Get**: read one document by id.
//! - **Insert**: create a document, the store assigns the id.
//! - **UpdateFields**: merge a [`Document::Patch`] into one document.
//! - **Delete**: remove one document.
//! - **Subscribe**: register for full snapshots pushed after every change.

use crate::document::Document;
use crate::error::StoreError;
use crate::snapshot::Subscription;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the collection.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the collection actor.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    FetchAll {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Insert {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    UpdateFields {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Subscribe {
        respond_to: Response<Subscription<T>>,
    },
}
