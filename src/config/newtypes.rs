//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated backend API base URL.
///
/// This newtype ensures the base URL is an absolute http(s) URL and
/// normalizes away any trailing slash so paths can be appended uniformly.
///
/// # Example
///
/// ```rust
/// use accountrix_client::ApiBaseUrl;
///
/// let base = ApiBaseUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.example.com");
/// assert_eq!(base.join("/auth/login/"), "https://api.example.com/auth/login/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Creates a new validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBaseUrl`] if the URL has no http(s)
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidApiBaseUrl { url: url.clone() })?;

        // Host ends at port, path, query, or end of string
        let host_end = rest.find([':', '/', '?', '#']).unwrap_or(rest.len());
        if rest[..host_end].is_empty() {
            return Err(ConfigError::InvalidApiBaseUrl { url });
        }

        Ok(Self(url))
    }

    /// Appends a path to the base URL.
    ///
    /// The path should start with `/`; the base has no trailing slash.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated session signing secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SessionSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use accountrix_client::SessionSecret;
///
/// let secret = SessionSecret::new("my-signing-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SessionSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SessionSecret(String);

impl SessionSecret {
    /// Creates a new validated session secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySessionSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySessionSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for SessionSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(*****)")
    }
}

/// A validated OAuth client ID for the delegated provider.
///
/// This newtype ensures the client ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use accountrix_client::ProviderClientId;
///
/// let id = ProviderClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderClientId(String);

impl ProviderClientId {
    /// Creates a new validated provider client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyProviderClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyProviderClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ProviderClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated OAuth client secret for the delegated provider.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ProviderClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use accountrix_client::ProviderClientSecret;
///
/// let secret = ProviderClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ProviderClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderClientSecret(String);

impl ProviderClientSecret {
    /// Creates a new validated provider client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyProviderClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyProviderClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ProviderClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProviderClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderClientSecret(*****)")
    }
}
