//! Draft order resource
//!
//! Draft orders are uncommitted orders that stay editable until checkout.
//! The client also uses them as server-side backing for the cart and the
//! favorites list.

use super::{Customer, Timestamp};
use serde::{Deserialize, Serialize};

/// Draft order lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftOrderStatus {
    /// Editable
    Open,
    /// An invoice was sent to the customer
    InvoiceSent,
    /// Converted into an order
    Completed,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

/// A draft order on the commerce backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOrder {
    /// Server-assigned id
    pub id: u64,
    /// Human-readable name (e.g., "#D12")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Customer email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Lifecycle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DraftOrderStatus>,
    /// Line items
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Currency code for the totals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Sum of line items before tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,
    /// Total tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
    /// Grand total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Comma-separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Discount applied to the whole order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,
    /// Owning customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl DraftOrder {
    /// Total number of units across all line items
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }

    /// Find the line item for a variant
    pub fn line_item_for_variant(&self, variant_id: u64) -> Option<&LineItem> {
        self.line_items
            .iter()
            .find(|item| item.variant_id == Some(variant_id))
    }
}

/// A single line in a draft order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Server-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Product variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    /// Product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Product title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Variant title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    /// Vendor (brand)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Units ordered
    #[serde(default)]
    pub quantity: u32,
    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Custom name/value pairs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<LineItemProperty>,
}

impl LineItem {
    /// Line item for a product variant
    pub fn for_variant(variant_id: u64, quantity: u32) -> Self {
        Self {
            variant_id: Some(variant_id),
            quantity,
            ..Default::default()
        }
    }

    /// Attach a custom property
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(LineItemProperty {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Custom property attached to a line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemProperty {
    /// Property name
    pub name: String,
    /// Property value
    pub value: String,
}

/// Discount applied to a draft order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    /// Discount title (usually the code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Discount value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `percentage` or `fixed_amount`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Computed amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// Reference to an existing customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    /// Customer id
    pub id: u64,
}

/// Payload for creating or updating a draft order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftOrderRequest {
    /// Customer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Line items; an update replaces the full list
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Comma-separated tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Owning customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    /// Use the customer's default address for shipping and billing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_customer_default_address: Option<bool>,
    /// Discount for the whole order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,
}

impl DraftOrderRequest {
    /// Request owned by a customer
    pub fn for_customer(customer_id: u64) -> Self {
        Self {
            customer: Some(CustomerRef { id: customer_id }),
            use_customer_default_address: Some(true),
            ..Default::default()
        }
    }

    /// Append a line item
    pub fn line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    /// Set the note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
