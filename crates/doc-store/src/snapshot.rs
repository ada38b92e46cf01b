//! # Snapshots & Subscriptions
//!
//! A [`Snapshot`] is the complete contents of a collection at one version. Subscribers never see
//! diffs: every delivery is the full document list, so derived views can be rebuilt from scratch.

use crate::document::Document;
use std::sync::Arc;
use tokio::sync::mpsc;

/// The full contents of a collection after a change.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// Strictly increasing per collection. Starts at 0 for an untouched collection.
    pub version: u64,
    /// Every document, in insertion order.
    pub documents: Arc<Vec<T>>,
}

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Receiving half of a collection subscription.
///
/// The first snapshot is available immediately after subscribing. Dropping the subscription
/// unregisters it the next time the collection changes.
#[derive(Debug)]
pub struct Subscription<T: Document> {
    receiver: mpsc::UnboundedReceiver<Snapshot<T>>,
}

impl<T: Document> Subscription<T> {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<Snapshot<T>>) -> Self {
        Self { receiver }
    }

    /// Wait for the next snapshot. Returns `None` once the collection has shut down.
    pub async fn next(&mut self) -> Option<Snapshot<T>> {
        self.receiver.recv().await
    }

    /// Skip to the newest snapshot already delivered, without waiting.
    pub fn try_latest(&mut self) -> Option<Snapshot<T>> {
        let mut latest = None;
        while let Ok(snapshot) = self.receiver.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }
}
