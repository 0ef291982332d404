//! Request description passed to the client's transport

use crate::error::NetworkError;
use serde::Serialize;

/// HTTP method for backend requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a resource
    Get,
    /// Create a resource
    Post,
    /// Update a resource
    Put,
}

impl HttpMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// A request to a resource path relative to the base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Resource path without suffix (e.g., "customers/42")
    pub path: String,
    /// Query parameters, in insertion order
    pub params: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Create a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Set the body to `value` wrapped under `root` (e.g., `{"customer": {...}}`)
    pub fn json_body<T: Serialize>(mut self, root: &str, value: &T) -> Result<Self, NetworkError> {
        let inner =
            serde_json::to_value(value).map_err(|e| NetworkError::Encode(e.to_string()))?;
        let mut envelope = serde_json::Map::new();
        envelope.insert(root.to_string(), inner);
        let body = serde_json::to_vec(&serde_json::Value::Object(envelope))
            .map_err(|e| NetworkError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}
