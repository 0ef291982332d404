//! Remote operations offered by the commerce backend

use crate::models::{
    Brand, Customer, CustomerRequest, DraftOrder, DraftOrderRequest, PriceRule, Product,
};
use crate::Result;
use async_trait::async_trait;

/// Typed remote operations, one HTTP round trip each
///
/// [`NetworkClient`](crate::NetworkClient) is the production implementation.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// Fetch a customer by id
    async fn get_customer(&self, id: u64) -> Result<Customer>;

    /// Create a customer; the server assigns the id
    async fn create_customer(&self, request: &CustomerRequest) -> Result<Customer>;

    /// Update an existing customer
    async fn update_customer(&self, id: u64, request: &CustomerRequest) -> Result<Customer>;

    /// Find the customer registered with `email`
    async fn get_customer_by_email(&self, email: &str) -> Result<Customer>;

    /// Create a draft order
    async fn create_draft_order(&self, request: &DraftOrderRequest) -> Result<DraftOrder>;

    /// Fetch a draft order by id
    async fn get_draft_order(&self, id: u64) -> Result<DraftOrder>;

    /// Update an existing draft order
    async fn update_draft_order(&self, id: u64, request: &DraftOrderRequest) -> Result<DraftOrder>;

    /// List all brands
    async fn get_brands(&self) -> Result<Vec<Brand>>;

    /// List the products of one vendor
    async fn get_brand_products(&self, vendor: &str) -> Result<Vec<Product>>;

    /// Fetch a product by id
    async fn get_product_by_id(&self, id: u64) -> Result<Product>;

    /// List all price rules (discount codes)
    async fn get_discount_codes(&self) -> Result<Vec<PriceRule>>;
}
