//! Product catalog resources

use super::Timestamp;
use serde::{Deserialize, Serialize};

/// A brand, backed by one of the backend's smart collections
///
/// The collection title doubles as the vendor tag used to filter products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Collection id
    pub id: u64,
    /// Brand name
    #[serde(default, alias = "name")]
    pub title: String,
    /// URL handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Brand image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl Brand {
    /// Vendor tag to pass to a product lookup
    pub fn vendor(&self) -> &str {
        &self.title
    }
}

/// A product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: u64,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Vendor (brand)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Product type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// HTML description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// URL handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Comma-separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// `active`, `draft` or `archived`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Variants
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Options (e.g., Size, Color)
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// All images
    #[serde(default)]
    pub images: Vec<Image>,
    /// Featured image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Product {
    /// Price of the first variant
    pub fn price(&self) -> Option<&str> {
        self.variants.first().and_then(|v| v.price.as_deref())
    }

    /// Featured image, or the first image
    pub fn featured_image(&self) -> Option<&Image> {
        self.image.as_ref().or_else(|| self.images.first())
    }

    /// Total stock across variants that track inventory
    pub fn inventory_quantity(&self) -> i64 {
        self.variants
            .iter()
            .filter_map(|v| v.inventory_quantity)
            .sum()
    }
}

/// A purchasable variant of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant id
    pub id: u64,
    /// Parent product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Units in stock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    /// First option value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    /// Second option value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,
    /// Third option value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,
}

/// A product option and its allowed values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name
    pub name: String,
    /// Allowed values
    #[serde(default)]
    pub values: Vec<String>,
}

/// An image hosted by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Image URL
    pub src: String,
    /// Alt text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}
