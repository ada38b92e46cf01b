//! # Collection Actor
//!
//! The `CollectionActor` owns one named collection and processes every request for it
//! sequentially, so the documents need no locking. It is the "server" half; the
//! [`CollectionClient`] is the handle the rest of the program holds.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::snapshot::{Snapshot, Subscription};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a single collection of documents.
///
/// # Usage Pattern
///
/// 1. **Create**: `CollectionActor::new()` returns the actor and its client.
/// 2. **Run**: spawn `actor.run()` on the runtime.
/// 3. **Use**: clone the client wherever the collection is needed.
///
/// The actor stops once every client has been dropped.
///
/// # Implementation Details
///
/// Documents live in a `HashMap` keyed by id. A separate `order` vector remembers insertion
/// order, which is the order [`StoreRequest::FetchAll`] and snapshots return. Every successful
/// mutation bumps `version` and pushes a fresh full [`Snapshot`] to each live subscriber.
pub struct CollectionActor<T: Document> {
    name: String,
    receiver: mpsc::Receiver<StoreRequest<T>>,
    documents: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
    version: u64,
    subscribers: Vec<mpsc::UnboundedSender<Snapshot<T>>>,
}

impl<T: Document> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// # Arguments
    ///
    /// * `name` - Collection name, used in logs.
    /// * `buffer_size` - Capacity of the request channel. Clients wait when it is full.
    pub fn new(name: impl Into<String>, buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name: name.into(),
            receiver,
            documents: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
            version: 0,
            subscribers: Vec::new(),
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client is dropped.
    pub async fn run(mut self) {
        let collection = self.name.clone();
        info!(%collection, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::FetchAll { respond_to } => {
                    let documents = self.ordered_documents();
                    debug!(%collection, count = documents.len(), "FetchAll");
                    let _ = respond_to.send(Ok(documents));
                }
                StoreRequest::Get { id, respond_to } => {
                    let document = self.documents.get(&id).cloned();
                    debug!(%collection, %id, found = document.is_some(), "Get");
                    let _ = respond_to.send(Ok(document));
                }
                StoreRequest::Insert { params, respond_to } => {
                    debug!(%collection, ?params, "Insert");
                    let id = T::Id::from(self.next_id);

                    let document = match T::from_create(id.clone(), params) {
                        Ok(document) => document,
                        Err(e) => {
                            warn!(%collection, error = %e, "Insert rejected");
                            let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                            continue;
                        }
                    };
                    if let Some(key) = self.conflicting_key(&document, None) {
                        warn!(%collection, %key, "Insert conflicts");
                        let _ = respond_to.send(Err(StoreError::Conflict(key)));
                        continue;
                    }

                    self.next_id += 1;
                    self.documents.insert(id.clone(), document);
                    self.order.push(id.clone());
                    info!(%collection, %id, size = self.documents.len(), "Inserted");
                    let _ = respond_to.send(Ok(id));
                    self.publish();
                }
                StoreRequest::UpdateFields {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(%collection, %id, ?patch, "UpdateFields");
                    let Some(current) = self.documents.get(&id) else {
                        warn!(%collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    // Patch a copy so a rejected patch leaves the stored document untouched.
                    let mut updated = current.clone();
                    if let Err(e) = updated.apply_patch(patch) {
                        warn!(%collection, %id, error = %e, "Update rejected");
                        let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        continue;
                    }
                    if let Some(key) = self.conflicting_key(&updated, Some(&id)) {
                        warn!(%collection, %id, %key, "Update conflicts");
                        let _ = respond_to.send(Err(StoreError::Conflict(key)));
                        continue;
                    }

                    self.documents.insert(id.clone(), updated.clone());
                    info!(%collection, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                    self.publish();
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(%collection, %id, "Delete");
                    if self.documents.remove(&id).is_some() {
                        self.order.retain(|existing| existing != &id);
                        info!(%collection, %id, size = self.documents.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                        self.publish();
                    } else {
                        warn!(%collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Subscribe { respond_to } => {
                    let (sender, receiver) = mpsc::unbounded_channel();
                    let _ = sender.send(self.snapshot());
                    self.subscribers.push(sender);
                    debug!(%collection, subscribers = self.subscribers.len(), "Subscribe");
                    let _ = respond_to.send(Ok(Subscription::new(receiver)));
                }
            }
        }

        info!(%collection, size = self.documents.len(), "Shutdown");
    }

    fn ordered_documents(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.documents.get(id).cloned())
            .collect()
    }

    fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            version: self.version,
            documents: Arc::new(self.ordered_documents()),
        }
    }

    fn publish(&mut self) {
        self.version += 1;
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
        debug!(
            collection = %self.name,
            version = snapshot.version,
            subscribers = self.subscribers.len(),
            "Published"
        );
    }

    fn conflicting_key(&self, candidate: &T, skip: Option<&T::Id>) -> Option<String> {
        let key = candidate.unique_key()?;
        self.documents
            .iter()
            .filter(|(id, _)| Some(*id) != skip)
            .any(|(_, existing)| existing.unique_key().as_deref() == Some(key.as_str()))
            .then_some(key)
    }
}
