//! Core application services for Shopper
//!
//! This crate wires the storage and network layers together: the
//! [`Repository`] facade the UI calls into, the device [`SessionStore`],
//! locale resolution, configuration and the [`AppContext`] composition root.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod locale;
pub mod repository;
pub mod session;
pub mod telemetry;

pub use config::{AppConfig, PaymentRedirects};
pub use context::AppContext;
pub use error::{AppError, Result};
pub use locale::{resolve_locale, Locale, TextDirection};
pub use repository::Repository;
pub use session::{Session, SessionStore};
