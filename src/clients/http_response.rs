//! HTTP response types for the Accountrix client.
//!
//! This module provides the [`HttpResponse`] type wrapping the status code
//! and parsed JSON body of a backend response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the backend resource API.
///
/// Contains the response status code, headers, and the parsed JSON body.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use accountrix_client::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!([{"id": 1, "name": "Chair"}]));
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header if present.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Deserializes the response body into the expected type.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match the
    /// expected shape.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }

    /// Extracts a human-readable error message from the response body.
    ///
    /// The backend reports errors as `{"detail": "..."}` or `{"error": "..."}`.
    /// Falls back to a generic status-code message when neither is present.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.body
            .get("detail")
            .or_else(|| self.body.get("error"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(
                || format!("Request failed with status {}", self.code),
                ToString::to_string,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(response(200, json!({})).is_ok());
        assert!(response(201, json!({})).is_ok());
        assert!(response(299, json!({})).is_ok());
    }

    #[test]
    fn test_is_not_ok_for_error_codes() {
        assert!(!response(199, json!({})).is_ok());
        assert!(!response(400, json!({})).is_ok());
        assert!(!response(500, json!({})).is_ok());
    }

    #[test]
    fn test_parse_deserializes_body() {
        #[derive(serde::Deserialize)]
        struct Item {
            id: u64,
        }

        let items: Vec<Item> = response(200, json!([{"id": 1}, {"id": 2}]))
            .parse()
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_error_message_prefers_detail_field() {
        let message = response(401, json!({"detail": "Authentication required."})).error_message();
        assert_eq!(message, "Authentication required.");
    }

    #[test]
    fn test_error_message_falls_back_to_error_field() {
        let message = response(400, json!({"error": "invalid quantity"})).error_message();
        assert_eq!(message, "invalid quantity");
    }

    #[test]
    fn test_error_message_generic_when_body_opaque() {
        let message = response(502, json!({})).error_message();
        assert!(message.contains("502"));
    }

    #[test]
    fn test_retry_after_header_is_parsed() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);
        let response = HttpResponse::new(429, headers, json!({}));
        assert_eq!(response.retry_request_after, Some(2.5));
    }
}
