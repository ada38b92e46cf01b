//! # Store Errors
//!
//! Every failure a collection can report. Callers above the store usually collapse all of these
//! into a single persistence failure; the variants exist so logs and tests can tell them apart.

/// Errors that can occur within the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection closed")]
    Closed,
    #[error("Collection dropped response channel")]
    Dropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Document conflicts with existing key: {0}")]
    Conflict(String),
    #[error("Document rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
