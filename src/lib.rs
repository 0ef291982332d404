//! Shopper data-access core
//!
//! Umbrella crate re-exporting the workspace members so applications can
//! depend on a single crate.

#![warn(missing_docs)]

pub use app_core;
pub use commerce_client;
pub use storage;
