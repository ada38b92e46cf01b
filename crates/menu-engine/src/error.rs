//! Error type shared by the menu clients.

use crate::model::ValidationError;
use thiserror::Error;

/// Errors surfaced to callers of the menu engine.
///
/// Every store failure becomes [`MenuError::PersistenceFailure`]; the underlying
/// [`StoreError`](doc_store::StoreError) is kept only as text. The other variants are raised
/// before any write is attempted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// A read or write against the store failed.
    #[error("{operation} failed: {detail}")]
    PersistenceFailure { operation: String, detail: String },

    /// Input rejected before anything was written.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A category with the same normalized name already exists.
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),
}

impl MenuError {
    pub fn persistence(operation: impl Into<String>, detail: impl ToString) -> Self {
        MenuError::PersistenceFailure {
            operation: operation.into(),
            detail: detail.to_string(),
        }
    }
}

impl From<ValidationError> for MenuError {
    fn from(e: ValidationError) -> Self {
        MenuError::Validation(e.to_string())
    }
}
