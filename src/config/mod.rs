//! Configuration types for the Accountrix client.
//!
//! This module provides the core configuration types used to initialize
//! the client for communication with the backend and the delegated
//! identity provider.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The main configuration struct holding all client settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ProviderConfig`]: Settings for the delegated OAuth provider
//! - [`ApiBaseUrl`]: A validated backend base URL newtype
//! - [`SessionSecret`]: A validated session signing secret with masked debug output
//! - [`ProviderClientId`] / [`ProviderClientSecret`]: Validated OAuth credentials
//!
//! # Example
//!
//! ```rust
//! use accountrix_client::{ApiBaseUrl, ClientConfig, SessionSecret};
//!
//! let config = ClientConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
//!     .session_secret(SessionSecret::new("signing-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, ProviderClientId, ProviderClientSecret, SessionSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout applied to all backend calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default OAuth scopes requested from the delegated provider.
const DEFAULT_PROVIDER_SCOPES: &str = "openid email profile";

/// Settings for the delegated OAuth provider.
///
/// Holds the credentials and endpoints needed to run the
/// authorization-code flow against a third-party identity provider.
///
/// # Example
///
/// ```rust
/// use accountrix_client::{ProviderClientId, ProviderClientSecret, ProviderConfig};
///
/// let provider = ProviderConfig::new(
///     ProviderClientId::new("client-id").unwrap(),
///     ProviderClientSecret::new("client-secret").unwrap(),
///     "https://accounts.example.com/o/oauth2/auth",
///     "https://accounts.example.com/o/oauth2/token",
///     "https://myapp.example.com/auth/callback",
/// )
/// .unwrap();
///
/// assert_eq!(provider.scopes(), "openid email profile");
/// ```
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    client_id: ProviderClientId,
    client_secret: ProviderClientSecret,
    authorize_endpoint: String,
    token_endpoint: String,
    redirect_url: String,
    scopes: String,
}

impl ProviderConfig {
    /// Creates provider settings, validating all endpoint URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProviderEndpoint`] if any endpoint is
    /// not an absolute http(s) URL.
    pub fn new(
        client_id: ProviderClientId,
        client_secret: ProviderClientSecret,
        authorize_endpoint: impl Into<String>,
        token_endpoint: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client_id,
            client_secret,
            authorize_endpoint: validate_endpoint(authorize_endpoint.into())?,
            token_endpoint: validate_endpoint(token_endpoint.into())?,
            redirect_url: validate_endpoint(redirect_url.into())?,
            scopes: DEFAULT_PROVIDER_SCOPES.to_string(),
        })
    }

    /// Overrides the OAuth scopes requested from the provider.
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = scopes.into();
        self
    }

    /// Returns the OAuth client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ProviderClientId {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ProviderClientSecret {
        &self.client_secret
    }

    /// Returns the provider's authorization endpoint.
    #[must_use]
    pub fn authorize_endpoint(&self) -> &str {
        &self.authorize_endpoint
    }

    /// Returns the provider's token endpoint.
    #[must_use]
    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint
    }

    /// Returns the redirect URL registered with the provider.
    #[must_use]
    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    /// Returns the OAuth scopes requested from the provider.
    #[must_use]
    pub fn scopes(&self) -> &str {
        &self.scopes
    }
}

/// Validates that an endpoint is an absolute http(s) URL.
fn validate_endpoint(url: String) -> Result<String, ConfigError> {
    let url = url.trim().to_string();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidProviderEndpoint { url: url.clone() })?;
    let host_end = rest.find([':', '/', '?', '#']).unwrap_or(rest.len());
    if rest[..host_end].is_empty() {
        return Err(ConfigError::InvalidProviderEndpoint { url });
    }
    Ok(url)
}

/// Configuration for the Accountrix client.
///
/// This struct holds all configuration needed for client operations:
/// the backend base URL, the session signing secret, the request timeout,
/// and (optionally) delegated provider settings.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use accountrix_client::{ApiBaseUrl, ClientConfig, SessionSecret};
///
/// let config = ClientConfig::builder()
///     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
///     .session_secret(SessionSecret::new("signing-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.provider().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_base_url: ApiBaseUrl,
    session_secret: SessionSecret,
    request_timeout: Duration,
    provider: Option<ProviderConfig>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the backend API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    /// Returns the session signing secret.
    #[must_use]
    pub const fn session_secret(&self) -> &SessionSecret {
        &self.session_secret
    }

    /// Returns the request timeout applied to backend calls.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the delegated provider settings, if configured.
    #[must_use]
    pub const fn provider(&self) -> Option<&ProviderConfig> {
        self.provider.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `api_base_url` and `session_secret`. All other
/// fields have sensible defaults.
///
/// # Defaults
///
/// - `request_timeout`: 30 seconds
/// - `provider`: `None` (direct credential login only)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use accountrix_client::{ApiBaseUrl, ClientConfig, SessionSecret};
///
/// let config = ClientConfig::builder()
///     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
///     .session_secret(SessionSecret::new("signing-secret").unwrap())
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_prefix("AdminUi/2.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_base_url: Option<ApiBaseUrl>,
    session_secret: Option<SessionSecret>,
    request_timeout: Option<Duration>,
    provider: Option<ProviderConfig>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend API base URL (required).
    #[must_use]
    pub fn api_base_url(mut self, url: ApiBaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the session signing secret (required).
    #[must_use]
    pub fn session_secret(mut self, secret: SessionSecret) -> Self {
        self.session_secret = Some(secret);
        self
    }

    /// Sets the request timeout for backend calls.
    ///
    /// Timeout expiry is treated as a normal transport failure: the
    /// affected resource records an error and clears its loading flag.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the delegated provider settings, enabling the OAuth login path.
    #[must_use]
    pub fn provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_base_url` or
    /// `session_secret` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let api_base_url = self.api_base_url.ok_or(ConfigError::MissingRequiredField {
            field: "api_base_url",
        })?;
        let session_secret = self
            .session_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "session_secret",
            })?;

        Ok(ClientConfig {
            api_base_url,
            session_secret,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            provider: self.provider,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_provider() -> ProviderConfig {
        ProviderConfig::new(
            ProviderClientId::new("client-id").unwrap(),
            ProviderClientSecret::new("client-secret").unwrap(),
            "https://accounts.example.com/auth",
            "https://accounts.example.com/token",
            "https://myapp.example.com/callback",
        )
        .unwrap()
    }

    #[test]
    fn test_builder_requires_api_base_url() {
        let result = ClientConfigBuilder::new()
            .session_secret(SessionSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_base_url"
            })
        ));
    }

    #[test]
    fn test_builder_requires_session_secret() {
        let result = ClientConfigBuilder::new()
            .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "session_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ClientConfig::builder()
            .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
            .session_secret(SessionSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
        assert!(config.provider().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ClientConfig::builder()
            .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
            .session_secret(SessionSecret::new("secret").unwrap())
            .request_timeout(Duration::from_secs(5))
            .provider(sample_provider())
            .user_agent_prefix("AdminUi/2.0")
            .build()
            .unwrap();

        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(config.provider().is_some());
        assert_eq!(config.user_agent_prefix(), Some("AdminUi/2.0"));
    }

    #[test]
    fn test_provider_config_rejects_invalid_endpoint() {
        let result = ProviderConfig::new(
            ProviderClientId::new("id").unwrap(),
            ProviderClientSecret::new("secret").unwrap(),
            "accounts.example.com/auth",
            "https://accounts.example.com/token",
            "https://myapp.example.com/callback",
        );

        assert!(matches!(
            result,
            Err(ConfigError::InvalidProviderEndpoint { .. })
        ));
    }

    #[test]
    fn test_provider_config_scope_override() {
        let provider = sample_provider().with_scopes("openid email");
        assert_eq!(provider.scopes(), "openid email");
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
    }
}
