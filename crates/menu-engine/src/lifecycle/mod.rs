//! # System Lifecycle
//!
//! Starting, seeding and stopping the menu system.
//!
//! [`MenuSystem`] creates one collection actor per collection (menu items and categories),
//! spawns each on its own task, and hands out the typed clients. Neither actor depends on the
//! other, so there is no wiring beyond that.
//!
//! ## Shutdown
//!
//! 1. Drop every client, which closes the request channels.
//! 2. Each actor sees its channel close, logs its final size and exits. Its subscriptions end,
//!    which in turn ends any [`MenuBoard`](crate::board::MenuBoard) feeds.
//! 3. Await the actor tasks.
//!
//! Clients cloned out of the system keep their actor alive, so drop them before calling
//! [`MenuSystem::shutdown`].
//!
//! ## Tracing
//!
//! [`setup_tracing`] installs the subscriber once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and writes
//! RUST_LOG=debug cargo run     # every request with its payload
//! ```

pub mod menu_system;
pub mod seed;
pub mod tracing;

pub use menu_system::*;
pub use seed::*;
pub use self::tracing::*;
