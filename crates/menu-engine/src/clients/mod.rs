//! Caller-facing wrappers around the collection stores.

pub mod category_client;
pub mod menu_client;
pub mod store_client;

pub use category_client::*;
pub use menu_client::*;
pub use store_client::*;
