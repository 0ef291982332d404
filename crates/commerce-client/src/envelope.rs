//! Response envelopes
//!
//! The backend wraps payloads under a root key (`{"customer": {...}}`,
//! `{"products": [...]}`). Bare payloads are accepted as well.

use crate::error::NetworkError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) const CUSTOMER: &str = "customer";
pub(crate) const CUSTOMERS: &str = "customers";
pub(crate) const DRAFT_ORDER: &str = "draft_order";
pub(crate) const SMART_COLLECTIONS: &str = "smart_collections";
pub(crate) const PRODUCT: &str = "product";
pub(crate) const PRODUCTS: &str = "products";
pub(crate) const PRICE_RULES: &str = "price_rules";

/// Decode `body` into `T`, unwrapping `root` when present
pub(crate) fn decode<T: DeserializeOwned>(body: &str, root: &str) -> Result<T, NetworkError> {
    let mut value: Value = serde_json::from_str(body)
        .map_err(|e| NetworkError::Decode(format!("malformed JSON: {e}")))?;

    let unwrapped = value.as_object_mut().and_then(|object| object.remove(root));
    let payload = unwrapped.unwrap_or(value);

    serde_json::from_value(payload)
        .map_err(|e| NetworkError::Decode(format!("unexpected `{root}` payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Product};

    #[test]
    fn test_wrapped_object() {
        let customer: Customer =
            decode(r#"{"customer":{"id":42,"email":"a@x.com"}}"#, CUSTOMER).unwrap();
        assert_eq!(customer.id, 42);
    }

    #[test]
    fn test_bare_object() {
        let customer: Customer = decode(r#"{"id":42,"name":"Alice"}"#, CUSTOMER).unwrap();
        assert_eq!(customer.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_wrapped_and_bare_lists() {
        let wrapped: Vec<Product> =
            decode(r#"{"products":[{"id":1},{"id":2}]}"#, PRODUCTS).unwrap();
        assert_eq!(wrapped.len(), 2);

        let bare: Vec<Product> = decode(r#"[{"id":3}]"#, PRODUCTS).unwrap();
        assert_eq!(bare[0].id, 3);
    }

    #[test]
    fn test_malformed_json() {
        let err = decode::<Customer>("{not json", CUSTOMER).unwrap_err();
        assert!(matches!(err, NetworkError::Decode(_)));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = decode::<Customer>(r#"{"customer":{"name":"no id"}}"#, CUSTOMER).unwrap_err();
        assert!(matches!(err, NetworkError::Decode(_)));
    }
}
