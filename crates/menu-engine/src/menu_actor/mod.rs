//! # Menu Item Collection
//!
//! Wires [`MenuItem`] into the document store. The actor itself is the generic
//! [`CollectionActor`]; this module only supplies the [`Document`](doc_store::Document)
//! implementation (see [`document`]) and a factory.
//!
//! ```rust
//! use menu_engine::menu_actor;
//! use menu_engine::clients::MenuClient;
//! use menu_engine::model::MenuItemCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, store) = menu_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let menu = MenuClient::new(store);
//!     let id = menu
//!         .add_item(MenuItemCreate::new("Burgers", "Lamb Royale", "Minced lamb patty"))
//!         .await?;
//!     assert_eq!(menu.items().await?[0].id, id);
//!     Ok(())
//! }
//! ```

pub mod document;

use crate::model::MenuItem;
use doc_store::{CollectionActor, CollectionClient};

/// Collection name used in logs.
pub const COLLECTION: &str = "menuItems";

/// Creates the menu-items actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<MenuItem>, CollectionClient<MenuItem>) {
    CollectionActor::new(COLLECTION, buffer_size)
}
