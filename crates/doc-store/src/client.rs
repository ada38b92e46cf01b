//! # Collection Client
//!
//! The handle used to talk to a [`CollectionActor`](crate::CollectionActor).

use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::snapshot::Subscription;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `CollectionActor`.
///
/// The client only holds the request sender, so cloning it is cheap and clones can be moved into
/// other tasks. Every call sends one [`StoreRequest`] and awaits the oneshot reply.
#[derive(Clone)]
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn fetch_all(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FetchAll { respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn insert(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Insert { params, respond_to })
            .await
    }

    pub async fn update_fields(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::UpdateFields {
            id,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn subscribe(&self) -> Result<Subscription<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Subscribe { respond_to })
            .await
    }
}
