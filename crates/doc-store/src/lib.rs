//! # Document Store
//!
//! An in-process document database built from one actor per collection. Each
//! [`CollectionActor`] owns its documents and serves requests one at a time; the rest of the
//! program talks to it through a cloneable [`CollectionClient`].
//!
//! ## Operations
//!
//! Every collection supports the same small surface, captured by the [`DocumentStore`] trait:
//!
//! - `fetch_all` / `get`: reads, always in document (insertion) order
//! - `insert`: the store assigns the id
//! - `update_fields`: merge of a [`Document::Patch`], never a whole-record replace
//! - `delete`
//! - `subscribe`: a push feed of full [`Snapshot`]s, one per change
//!
//! There are no multi-document transactions. A caller that issues several writes must treat
//! each one as independently succeeding or failing.
//!
//! ## Example
//!
//! ```rust
//! use doc_store::{CollectionActor, Document};
//!
//! #[derive(Clone, Debug)]
//! struct Dish { id: u32, name: String, price: u32 }
//! #[derive(Debug)] struct DishCreate { name: String, price: u32 }
//! #[derive(Debug)] struct DishPatch { price: Option<u32> }
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct DishError(String);
//!
//! impl Document for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Patch = DishPatch;
//!     type Error = DishError;
//!
//!     fn from_create(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name, price: params.price })
//!     }
//!
//!     fn apply_patch(&mut self, patch: DishPatch) -> Result<(), Self::Error> {
//!         if let Some(price) = patch.price { self.price = price; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = CollectionActor::<Dish>::new("dishes", 16);
//!     tokio::spawn(actor.run());
//!
//!     let mut feed = client.subscribe().await.unwrap();
//!     assert!(feed.next().await.unwrap().is_empty());
//!
//!     let id = client.insert(DishCreate { name: "Baklava".into(), price: 6 }).await.unwrap();
//!     client.update_fields(id, DishPatch { price: Some(7) }).await.unwrap();
//!
//!     let _after_insert = feed.next().await.unwrap();
//!     let after_update = feed.next().await.unwrap();
//!     assert_eq!(after_update.documents[0].price, 7);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockCollection`](mock::MockCollection), a client whose replies
//! are scripted, for injecting failures into code that sits on top of the store.

pub mod actor;
pub mod client;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod snapshot;
pub mod store;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use document::Document;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use snapshot::{Snapshot, Subscription};
pub use store::DocumentStore;
