//! # Document Trait
//!
//! The `Document` trait is the contract every record type (menu items, categories, ...) implements
//! to be stored in a [`CollectionActor`](crate::CollectionActor). It names the id, the payloads used
//! to create and patch a record, and the record's own error type.
//!
//! # Merge Semantics
//! Writes never replace a whole record. A [`Document::Patch`] is a set of optional fields and
//! [`Document::apply_patch`] overwrites only the fields that are present, the same way a
//! field-level update works against a hosted document database.
//!
//! # Uniqueness
//! [`Document::unique_key`] is a provided method returning `None`. Collections whose records must
//! be unique by some derived key (e.g. a case-folded name) override it and the actor rejects a
//! conflicting insert with [`StoreError::Conflict`](crate::StoreError::Conflict).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to live in a collection.
///
/// Associated types keep every collection strongly typed: a menu-item collection only accepts
/// menu-item payloads, and the compiler rejects anything else.
pub trait Document: Clone + Send + Sync + 'static {
    /// Opaque identifier assigned by the store.
    /// Built from the collection's `u32` counter, so ids are never reused after a delete.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The record body supplied by the caller on insert.
    type Create: Send + Sync + Debug;

    /// The optional fields supplied on a field update.
    type Patch: Send + Sync + Debug;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from its new id and the caller's payload.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Merge a patch into the record.
    fn apply_patch(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    /// Key that must be unique across the collection, if any.
    fn unique_key(&self) -> Option<String> {
        None
    }
}
