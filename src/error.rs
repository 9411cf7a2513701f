//! Error types for client configuration.
//!
//! This module contains the error type used when constructing and validating
//! the client configuration.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use accountrix_client::{ConfigError, SessionSecret};
//!
//! let result = SessionSecret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySessionSecret)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidApiBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Session signing secret cannot be empty.
    #[error("Session secret cannot be empty. Please provide a secret for signing session artifacts.")]
    EmptySessionSecret,

    /// Delegated provider client ID cannot be empty.
    #[error("Provider client ID cannot be empty. Please provide the OAuth client ID issued by the provider.")]
    EmptyProviderClientId,

    /// Delegated provider client secret cannot be empty.
    #[error("Provider client secret cannot be empty. Please provide the OAuth client secret issued by the provider.")]
    EmptyProviderClientSecret,

    /// Provider endpoint URL is invalid.
    #[error("Invalid provider endpoint URL '{url}'. Expected an absolute http(s) URL.")]
    InvalidProviderEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_base_url_error_message() {
        let error = ConfigError::InvalidApiBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("valid URL"));
    }

    #[test]
    fn test_empty_session_secret_error_message() {
        let error = ConfigError::EmptySessionSecret;
        let message = error.to_string();
        assert!(message.contains("Session secret cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "api_base_url",
        };
        let message = error.to_string();
        assert!(message.contains("api_base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySessionSecret;
        let _: &dyn std::error::Error = &error;
    }
}
