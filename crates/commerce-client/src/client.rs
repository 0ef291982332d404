//! HTTP client for the commerce backend
//!
//! One [`NetworkClient`] wraps one `reqwest::Client` and its immutable
//! configuration. Clones share the connection pool, so the composition root
//! builds it once and hands clones to whoever needs it.

use crate::api::CommerceApi;
use crate::config::{ClientConfig, ACCESS_TOKEN_HEADER};
use crate::envelope::{
    self, CUSTOMER, CUSTOMERS, DRAFT_ORDER, PRICE_RULES, PRODUCT, PRODUCTS, SMART_COLLECTIONS,
};
use crate::error::NetworkError;
use crate::models::{
    Brand, Customer, CustomerRequest, DraftOrder, DraftOrderRequest, PriceRule, Product,
};
use crate::request::{ApiRequest, HttpMethod};
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

/// Client for the commerce backend's REST API
///
/// # Examples
/// ```
/// use commerce_client::{ClientConfig, CommerceApi, NetworkClient};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::new("https://shop.example.com/admin/api/2024-01")
///         .with_access_token("shpat_123");
///     let client = NetworkClient::new(config)?;
///
///     let brands = client.get_brands().await?;
///     for brand in brands {
///         println!("{}", brand.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NetworkClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl NetworkClient {
    /// Build a client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| NetworkError::Config(format!("header name {key:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| NetworkError::Config(format!("header value for {key:?}: {e}")))?;
            headers.insert(name, value);
        }

        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(token)
                .map_err(|e| NetworkError::Config(format!("access token: {e}")))?;
            value.set_sensitive(true);
            let name = HeaderName::from_bytes(ACCESS_TOKEN_HEADER.as_bytes())
                .map_err(|e| NetworkError::Config(e.to_string()))?;
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NetworkError::Config(e.to_string()))?;

        tracing::debug!(
            base_url = %config.base_url,
            authenticated = config.access_token.is_some(),
            "built network client"
        );

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Perform one round trip and decode the payload found under `root`
    pub async fn execute<T>(&self, request: ApiRequest, root: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.url_for(&request.path);
        let method = request.method.as_str();

        let mut req = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };
        if !request.params.is_empty() {
            req = req.query(&request.params);
        }
        if let Some(body) = request.body {
            req = req
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        tracing::debug!(method, %url, "sending request");
        let started = Instant::now();

        let response = req.send().await.map_err(|e| {
            tracing::debug!(method, %url, error = %e, "request failed");
            NetworkError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            bytes = body.len(),
            "received response"
        );

        if !status.is_success() {
            return Err(NetworkError::from_status(status.as_u16(), &request.path, &body));
        }

        envelope::decode(&body, root)
    }
}

#[async_trait]
impl CommerceApi for NetworkClient {
    async fn get_customer(&self, id: u64) -> Result<Customer> {
        self.execute(ApiRequest::get(format!("customers/{id}")), CUSTOMER).await
    }

    async fn create_customer(&self, request: &CustomerRequest) -> Result<Customer> {
        let req = ApiRequest::post("customers").json_body(CUSTOMER, request)?;
        self.execute(req, CUSTOMER).await
    }

    async fn update_customer(&self, id: u64, request: &CustomerRequest) -> Result<Customer> {
        let req =
            ApiRequest::put(format!("customers/{id}")).json_body(CUSTOMER, request)?;
        self.execute(req, CUSTOMER).await
    }

    async fn get_customer_by_email(&self, email: &str) -> Result<Customer> {
        let req = ApiRequest::get("customers").param("email", email);
        let customers: Vec<Customer> = self.execute(req, CUSTOMERS).await?;

        // The filter is applied server-side; only an exact (case-insensitive) match counts.
        customers
            .into_iter()
            .find(|c| {
                c.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email))
            })
            .ok_or_else(|| NetworkError::NotFound {
                resource: format!("customers?email={email}"),
                status: None,
            })
    }

    async fn create_draft_order(&self, request: &DraftOrderRequest) -> Result<DraftOrder> {
        let req =
            ApiRequest::post("draft_orders").json_body(DRAFT_ORDER, request)?;
        self.execute(req, DRAFT_ORDER).await
    }

    async fn get_draft_order(&self, id: u64) -> Result<DraftOrder> {
        self.execute(ApiRequest::get(format!("draft_orders/{id}")), DRAFT_ORDER).await
    }

    async fn update_draft_order(&self, id: u64, request: &DraftOrderRequest) -> Result<DraftOrder> {
        let req =
            ApiRequest::put(format!("draft_orders/{id}")).json_body(DRAFT_ORDER, request)?;
        self.execute(req, DRAFT_ORDER).await
    }

    async fn get_brands(&self) -> Result<Vec<Brand>> {
        self.execute(ApiRequest::get("smart_collections"), SMART_COLLECTIONS).await
    }

    async fn get_brand_products(&self, vendor: &str) -> Result<Vec<Product>> {
        let req = ApiRequest::get("products").param("vendor", vendor);
        self.execute(req, PRODUCTS).await
    }

    async fn get_product_by_id(&self, id: u64) -> Result<Product> {
        self.execute(ApiRequest::get(format!("products/{id}")), PRODUCT).await
    }

    async fn get_discount_codes(&self) -> Result<Vec<PriceRule>> {
        self.execute(ApiRequest::get("price_rules"), PRICE_RULES).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_network_client_new() {
        let config = ClientConfig::new("https://shop.example.com")
            .with_access_token("shpat_123")
            .with_timeout(Duration::from_secs(60));

        let client = NetworkClient::new(config).unwrap();
        assert_eq!(client.base_url(), "https://shop.example.com");
        assert_eq!(client.config().timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_invalid_header_rejected() {
        let config = ClientConfig::new("https://shop.example.com").with_header("bad header", "x");
        let err = NetworkClient::new(config).unwrap_err();
        assert!(matches!(err, NetworkError::Config(_)));
    }

    #[test]
    fn test_invalid_token_rejected() {
        let config = ClientConfig::new("https://shop.example.com").with_access_token("line\nbreak");
        assert!(matches!(NetworkClient::new(config), Err(NetworkError::Config(_))));
    }

    #[test]
    fn test_clones_share_config() {
        let client =
            NetworkClient::new(ClientConfig::new("https://shop.example.com")).unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.config, &clone.config));
    }
}
