//! API Response types
//!
//! Standardized response structures for every BFF route.

use serde::{Deserialize, Serialize};

/// Unified API response envelope
///
/// Every route answers with this discriminated shape:
/// ```json
/// { "ok": true, "data": { ... } }
/// { "ok": false, "error": "...", "details": { ... } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Discriminant: `true` carries `data`, `false` carries `error`
    pub ok: bool,
    /// Response payload (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error message (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Optional structured error context (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
            details: None,
        }
    }

    /// Create an error response with structured context
    pub fn error_with_details(message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
            details: Some(details),
        }
    }
}

/// Paginated list as the upstream serves it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Page of items
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl<T> Paginated<T> {
    /// Total number of pages for this page size
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            0
        } else {
            ((self.total as f64) / (self.page_size as f64)).ceil() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_skips_error_fields() {
        let body = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
        assert!(body.get("error").is_none());
        assert!(body.get("details").is_none());
    }

    #[test]
    fn envelope_error_skips_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "boom");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Paginated::<u8> {
            items: vec![],
            total: 11,
            page: 1,
            page_size: 5,
        };
        assert_eq!(page.total_pages(), 3);
    }
}
