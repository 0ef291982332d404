//! Domain types returned by the commerce backend
//!
//! Field names follow the backend's snake_case JSON. Monetary amounts are
//! kept as the decimal strings the backend sends.

pub mod customer;
pub mod draft_order;
pub mod price_rule;
pub mod product;

pub use customer::{Customer, CustomerRequest};
pub use draft_order::{
    AppliedDiscount, CustomerRef, DraftOrder, DraftOrderRequest, DraftOrderStatus, LineItem,
    LineItemProperty,
};
pub use price_rule::{PriceRule, ValueType};
pub use product::{Brand, Image, Product, ProductOption, Variant};

/// Timestamp format used by the backend (RFC 3339 with offset)
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
