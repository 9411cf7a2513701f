//! Error types for resource store operations.

use thiserror::Error;

use crate::clients::HttpError;

/// Errors returned by authorization-gated store operations.
///
/// Fetch operations never return errors — their failures become
/// resource-local error state. Mutations distinguish a missing session
/// (synchronous, never reaches the network) from a failed network write so
/// callers can prompt sign-in rather than show a connectivity message.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation requires an authenticated session.
    ///
    /// Raised synchronously before any network call. A `Loading` session
    /// does not count as authenticated.
    #[error("Sign in to modify the basket")]
    Unauthorized,

    /// The network write failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl StoreError {
    /// Returns `true` if the error is the authorization precondition.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

// Verify StoreError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_unauthorized_is_distinguishable_from_http() {
        assert!(StoreError::Unauthorized.is_unauthorized());

        let http: StoreError = HttpError::Response(HttpResponseError {
            code: 502,
            message: "Bad gateway".to_string(),
        })
        .into();
        assert!(!http.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_message_prompts_sign_in() {
        assert!(StoreError::Unauthorized.to_string().contains("Sign in"));
    }
}
