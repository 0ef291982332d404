//! Commerce backend client
//!
//! This crate provides the typed REST client for the commerce backend:
//! configuration, request/response envelopes, domain models, the
//! [`CommerceApi`] trait and its HTTP implementation [`NetworkClient`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod client;
pub mod config;
mod envelope;
pub mod error;
pub mod models;
pub mod request;

pub use api::CommerceApi;
pub use client::NetworkClient;
pub use config::ClientConfig;
pub use error::NetworkError;

/// Result type for commerce backend operations
pub type Result<T> = std::result::Result<T, NetworkError>;
