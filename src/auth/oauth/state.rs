//! State parameter handling for OAuth CSRF protection.
//!
//! This module provides the [`StateParam`] type for generating and comparing
//! OAuth state parameters used for CSRF protection during the delegated
//! authorization flow.
//!
//! # Overview
//!
//! The state parameter ensures the callback was initiated by a legitimate
//! authorization request: a nonce is generated when the flow begins, stored
//! by the application, and compared (in constant time) against the value the
//! provider echoes back.
//!
//! # Example
//!
//! ```rust
//! use accountrix_client::auth::oauth::StateParam;
//!
//! let state = StateParam::new();
//! assert_eq!(state.as_ref().len(), 15);
//! assert!(state.matches(state.as_ref()));
//! assert!(!state.matches("something-else"));
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;
use subtle::ConstantTimeEq;

/// OAuth state parameter for CSRF protection.
///
/// Generated with a cryptographically secure random number generator at the
/// start of the authorization flow; compared in constant time when the
/// callback arrives.
///
/// # Thread Safety
///
/// `StateParam` is `Send + Sync`, making it safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam(String);

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    /// The length of generated nonces.
    const NONCE_LENGTH: usize = 15;

    /// Creates a new state parameter with a cryptographically secure
    /// random alphanumeric nonce.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accountrix_client::auth::oauth::StateParam;
    ///
    /// let state = StateParam::new();
    /// assert!(state.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();
        Self(nonce)
    }

    /// Wraps a previously stored state value.
    ///
    /// Use this to rebuild the expected state from wherever the application
    /// persisted it between `begin_auth` and the callback.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Compares this state against a received value in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        self.0.as_bytes().ct_eq(received.as_bytes()).into()
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
