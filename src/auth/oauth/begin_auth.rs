//! Authorization URL generation for the delegated provider.
//!
//! This module provides the [`begin_auth`] function for generating the
//! provider's authorization URL and the [`BeginAuthResult`] struct containing
//! the URL and state parameter.
//!
//! # Overview
//!
//! `begin_auth` is the first step of the delegated login path. It generates:
//!
//! 1. A cryptographically secure state parameter for CSRF protection
//! 2. An authorization URL to redirect the user to the provider
//!
//! # Example
//!
//! ```rust,ignore
//! use accountrix_client::auth::oauth::begin_auth;
//!
//! let result = begin_auth(&config)?;
//!
//! // Store result.state in the user's session
//! // Redirect user to result.auth_url
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::config::ClientConfig;

/// Result of initiating the delegated authorization flow.
///
/// Contains the authorization URL to redirect users to and the state
/// parameter that should be persisted (typically in a session or cookie)
/// for verification when the callback is received.
///
/// # Important
///
/// The `state` value **must** be stored by your application and passed to
/// [`validate_provider_callback`](crate::auth::oauth::validate_provider_callback)
/// when handling the callback. This is essential for CSRF protection.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// The full authorization URL to redirect the user to.
    pub auth_url: String,

    /// The state parameter generated for this authorization request.
    ///
    /// Store this value and compare it against the `state` parameter
    /// in the callback to prevent CSRF attacks.
    pub state: StateParam,
}

/// Initiates the delegated authorization code flow.
///
/// Generates the provider authorization URL the user should be redirected
/// to, along with a cryptographically secure state parameter.
///
/// # Errors
///
/// Returns [`OAuthError::MissingProviderConfig`] if no provider settings
/// are configured.
///
/// # Example
///
/// ```rust
/// use accountrix_client::auth::oauth::begin_auth;
/// use accountrix_client::{
///     ApiBaseUrl, ClientConfig, ProviderClientId, ProviderClientSecret, ProviderConfig,
///     SessionSecret,
/// };
///
/// let provider = ProviderConfig::new(
///     ProviderClientId::new("client-id").unwrap(),
///     ProviderClientSecret::new("client-secret").unwrap(),
///     "https://accounts.example.com/auth",
///     "https://accounts.example.com/token",
///     "https://myapp.example.com/auth/callback",
/// )
/// .unwrap();
///
/// let config = ClientConfig::builder()
///     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
///     .session_secret(SessionSecret::new("secret").unwrap())
///     .provider(provider)
///     .build()
///     .unwrap();
///
/// let result = begin_auth(&config).unwrap();
/// assert!(result.auth_url.starts_with("https://accounts.example.com/auth?"));
/// assert!(result.auth_url.contains("response_type=code"));
/// ```
pub fn begin_auth(config: &ClientConfig) -> Result<BeginAuthResult, OAuthError> {
    let provider = config.provider().ok_or(OAuthError::MissingProviderConfig)?;

    // Generate cryptographically secure state
    let state = StateParam::new();

    let params = vec![
        ("client_id", provider.client_id().as_ref().to_string()),
        ("redirect_uri", provider.redirect_url().to_string()),
        ("response_type", "code".to_string()),
        ("scope", provider.scopes().to_string()),
        ("state", state.to_string()),
    ];

    // Build query string with proper URL encoding for both keys and values
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!("{}?{}", provider.authorize_endpoint(), query_string);

    Ok(BeginAuthResult { auth_url, state })
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};
