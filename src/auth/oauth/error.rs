//! OAuth-specific error types for the delegated login path.
//!
//! This module contains error types for the delegated provider flow:
//! state verification, code exchange, and ID token decoding.
//!
//! # Error Types
//!
//! - [`OAuthError::MissingProviderConfig`]: No provider settings configured
//! - [`OAuthError::StateMismatch`]: OAuth state parameter doesn't match expected
//! - [`OAuthError::InvalidCallback`]: Callback parameters are malformed
//! - [`OAuthError::TokenExchangeFailed`]: Code exchange request failed
//! - [`OAuthError::InvalidIdToken`]: The provider's ID token failed decoding
//!
//! # Example
//!
//! ```rust
//! use accountrix_client::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use thiserror::Error;

/// Errors that can occur during the delegated provider flow.
///
/// This enum covers all failure modes in the authorization-code handoff,
/// from state verification to ID token decoding.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// No delegated provider is configured.
    ///
    /// The delegated login path requires [`ProviderConfig`] settings on the
    /// client configuration. Configure these via
    /// `ClientConfigBuilder::provider()`.
    ///
    /// [`ProviderConfig`]: crate::ProviderConfig
    #[error("Delegated provider settings must be configured for OAuth login")]
    MissingProviderConfig,

    /// OAuth state parameter mismatch.
    ///
    /// The state parameter in the callback does not match the expected state
    /// that was generated during `begin_auth()`. This is a security measure
    /// against CSRF attacks.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The expected state value that was generated.
        expected: String,
        /// The state value received in the callback.
        received: String,
    },

    /// Callback parameters are invalid or malformed.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// Description of what's invalid about the callback.
        reason: String,
    },

    /// Code exchange request failed.
    ///
    /// The POST request to exchange the authorization code for tokens
    /// returned a non-success HTTP status or could not be completed.
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// The HTTP status code returned (0 for network failures).
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The provider's ID token could not be decoded or validated.
    #[error("Invalid ID token: {reason}")]
    InvalidIdToken {
        /// Why the ID token was rejected.
        reason: String,
    },
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
