//! Network client configuration

use std::collections::HashMap;
use std::time::Duration;

/// Header carrying the backend access token
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Configuration for [`NetworkClient`](crate::NetworkClient)
///
/// Immutable once the client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL (e.g., "https://shop.myshopify.com/admin/api/2024-01")
    pub base_url: String,
    /// Access token sent with every request
    pub access_token: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// Suffix appended to every resource path
    pub resource_suffix: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
    /// Optional transport timeout; unset means no client-side deadline
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            access_token: None,
            user_agent: format!("Shopper/{}", env!("CARGO_PKG_VERSION")),
            resource_suffix: ".json".to_string(),
            default_headers: HashMap::new(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Build a config from `SHOPPER_BASE_URL`, `SHOPPER_ACCESS_TOKEN`
    /// and `SHOPPER_TIMEOUT_SECS`, falling back to defaults for unset values
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("SHOPPER_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(token) = std::env::var("SHOPPER_ACCESS_TOKEN") {
            if !token.is_empty() {
                config.access_token = Some(token);
            }
        }
        if let Some(secs) = std::env::var("SHOPPER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout = Some(Duration::from_secs(secs));
        }
        config
    }

    /// Set the access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the resource path suffix (use `""` for extensionless paths)
    pub fn with_resource_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.resource_suffix = suffix.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set a transport timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Absolute URL for a resource path
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/'),
            self.resource_suffix
        )
    }
}
