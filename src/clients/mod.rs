//! HTTP client types for backend communication.
//!
//! This module provides the foundational HTTP client layer for making
//! JSON requests to the backend resource API. It handles request/response
//! processing, retry logic, and error classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for backend communication
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A parsed response from the backend
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`HttpError`]: Unified error type for HTTP operations
//!
//! # Example
//!
//! ```rust,ignore
//! use accountrix_client::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/products/")
//!     .query_param("search", "chair")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(&request, None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`HttpRequest::builder`] with `.tries(n)` to enable retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
