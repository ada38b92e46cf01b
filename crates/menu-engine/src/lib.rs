//! # Menu Engine
//!
//! Ordering, grouping and numbering for a restaurant menu, backed by the in-process
//! [`doc_store`] collections.
//!
//! - [`ordering`]: pure functions over item lists (grouping, numbering, reorder plans).
//! - [`model`]: menu items and saved categories.
//! - [`menu_actor`] / [`category_actor`]: the two collections.
//! - [`clients`]: typed operations that map store failures to [`MenuError`](error::MenuError).
//! - [`board`]: snapshot-driven views for customers and managers.
//! - [`lifecycle`]: startup, seeding, shutdown and tracing.
//! - [`config`]: TOML configuration.

pub mod board;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod ordering;
