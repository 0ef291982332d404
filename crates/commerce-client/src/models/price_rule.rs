//! Price rules (discount codes)

use super::Timestamp;
use serde::{Deserialize, Serialize};

/// How a discount value is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Percentage off
    Percentage,
    /// Fixed amount off
    FixedAmount,
    /// Any value type this client does not know about
    #[serde(other)]
    Unknown,
}

/// A discount code and its terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
    /// Rule id
    pub id: u64,
    /// Title; shown to customers as the discount code
    #[serde(default)]
    pub title: String,
    /// Discount value, negative for reductions (e.g., "-10.0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// How `value` is applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    /// `line_item` or `shipping_line`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    /// `each` or `across`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<String>,
    /// Start of the validity window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
    /// End of the validity window; open-ended when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Timestamp>,
    /// Maximum number of uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    /// Limit to one use per customer
    #[serde(default)]
    pub once_per_customer: bool,
}

impl PriceRule {
    /// The discount code
    pub fn code(&self) -> &str {
        &self.title
    }

    /// Check if `at` falls inside the validity window
    pub fn is_active_at(&self, at: Timestamp) -> bool {
        let started = self.starts_at.map_or(true, |start| start <= at);
        let not_ended = self.ends_at.map_or(true, |end| at < end);
        started && not_ended
    }
}
