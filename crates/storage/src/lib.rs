//! Storage layer for Shopper
//!
//! This crate provides the device-local key-value store and the session
//! preference namespace built on top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod preferences;

pub use kv::{KvConfig, KvError, KvStore, Namespace};
pub use preferences::{PrefKey, PreferenceStore, USER_INFO_NAMESPACE};
