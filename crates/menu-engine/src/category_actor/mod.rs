//! Saved-category collection.
//!
//! Same shape as [`crate::menu_actor`]. The [`Document`](doc_store::Document) implementation
//! declares the normalized name as the unique key, so the collection itself refuses a second
//! "burgers" next to "Burgers".

pub mod document;

use crate::model::Category;
use doc_store::{CollectionActor, CollectionClient};

pub const COLLECTION: &str = "categories";

/// Creates the categories actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Category>, CollectionClient<Category>) {
    CollectionActor::new(COLLECTION, buffer_size)
}
