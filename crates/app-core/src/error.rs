//! Application-level errors

use commerce_client::NetworkError;
use storage::KvError;
use thiserror::Error;

/// Errors raised while wiring up or using the application core
#[derive(Debug, Error)]
pub enum AppError {
    /// Local storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Network client failure
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

/// Result type for application-level operations
pub type Result<T> = std::result::Result<T, AppError>;
