//! Repository facade consumed by the UI layer
//!
//! Each method is a single asynchronous call that resolves to exactly one
//! value or one error. Errors from the backend pass through unchanged; the
//! repository adds no caching, retry, or translation.

use commerce_client::models::{
    Brand, Customer, CustomerRequest, DraftOrder, DraftOrderRequest, PriceRule, Product,
};
use commerce_client::{CommerceApi, NetworkClient, Result};
use std::sync::Arc;

/// Data access entry point for screens and view models
///
/// Cheap to clone; clones share the same backend client.
#[derive(Clone)]
pub struct Repository {
    api: Arc<dyn CommerceApi>,
}

impl Repository {
    /// Create a repository over any backend implementation
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self { api }
    }

    /// Fetch a customer by id
    pub async fn get_customer(&self, id: u64) -> Result<Customer> {
        self.api.get_customer(id).await
    }

    /// Create a customer
    pub async fn create_customer(&self, request: &CustomerRequest) -> Result<Customer> {
        self.api.create_customer(request).await
    }

    /// Update a customer
    pub async fn update_customer(&self, id: u64, request: &CustomerRequest) -> Result<Customer> {
        self.api.update_customer(id, request).await
    }

    /// Find a customer by email
    pub async fn get_customer_by_email(&self, email: &str) -> Result<Customer> {
        self.api.get_customer_by_email(email).await
    }

    /// Create a draft order
    pub async fn create_draft_order(&self, request: &DraftOrderRequest) -> Result<DraftOrder> {
        self.api.create_draft_order(request).await
    }

    /// Fetch a draft order
    pub async fn get_draft_order(&self, id: u64) -> Result<DraftOrder> {
        self.api.get_draft_order(id).await
    }

    /// Update a draft order
    pub async fn update_draft_order(
        &self,
        id: u64,
        request: &DraftOrderRequest,
    ) -> Result<DraftOrder> {
        self.api.update_draft_order(id, request).await
    }

    /// List brands
    pub async fn get_brands(&self) -> Result<Vec<Brand>> {
        self.api.get_brands().await
    }

    /// List the products of a vendor
    pub async fn get_brand_products(&self, vendor: &str) -> Result<Vec<Product>> {
        self.api.get_brand_products(vendor).await
    }

    /// Fetch a product
    pub async fn get_product_by_id(&self, id: u64) -> Result<Product> {
        self.api.get_product_by_id(id).await
    }

    /// List discount codes
    pub async fn get_discount_codes(&self) -> Result<Vec<PriceRule>> {
        self.api.get_discount_codes().await
    }
}

impl From<NetworkClient> for Repository {
    fn from(client: NetworkClient) -> Self {
        Self::new(Arc::new(client))
    }
}
