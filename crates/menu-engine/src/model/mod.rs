//! Menu records stored in the document store.

pub mod category;
pub mod menu_item;

pub use category::*;
pub use menu_item::*;

use thiserror::Error;

/// A record failed its own field checks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A required text field was missing or blank.
    #[error("{0} is required")]
    MissingField(&'static str),
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
