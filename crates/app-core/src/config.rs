//! Application configuration

use commerce_client::ClientConfig;
use storage::KvConfig;

/// Redirect target after a successful payment
pub const PAYMENT_SUCCESS_URL: &str = "https://shopper.app/checkout/success";

/// Redirect target after a cancelled payment
pub const PAYMENT_CANCEL_URL: &str = "https://shopper.app/checkout/cancel";

/// Redirect targets handed to the checkout flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRedirects {
    /// URL the payment provider returns to on success
    pub success_url: String,
    /// URL the payment provider returns to on cancel
    pub cancel_url: String,
}

impl Default for PaymentRedirects {
    fn default() -> Self {
        Self {
            success_url: PAYMENT_SUCCESS_URL.to_string(),
            cancel_url: PAYMENT_CANCEL_URL.to_string(),
        }
    }
}

/// Everything needed to build an [`AppContext`](crate::AppContext)
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Backend client settings
    pub client: ClientConfig,
    /// Local key-value store settings
    pub storage: KvConfig,
    /// Checkout redirect targets
    pub payment: PaymentRedirects,
}

impl AppConfig {
    /// Configuration for a backend base URL with default storage
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientConfig::new(base_url),
            ..Default::default()
        }
    }

    /// Read backend settings from the environment (see [`ClientConfig::from_env`])
    /// and the storage path from `SHOPPER_DATA_PATH`
    pub fn from_env() -> Self {
        let mut config = Self {
            client: ClientConfig::from_env(),
            ..Default::default()
        };
        if let Ok(path) = std::env::var("SHOPPER_DATA_PATH") {
            config.storage = KvConfig::new(path);
        }
        config
    }

    /// Set the backend client configuration
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Set the storage configuration
    pub fn with_storage(mut self, storage: KvConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Set the payment redirect targets
    pub fn with_payment(mut self, payment: PaymentRedirects) -> Self {
        self.payment = payment;
        self
    }
}
