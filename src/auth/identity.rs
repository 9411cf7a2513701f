//! Identity types for authenticated users.
//!
//! This module provides the [`Identity`] type: the normalized user record
//! that both login paths (direct credential exchange and the delegated
//! provider) resolve to.
//!
//! # Overview
//!
//! Regardless of how a user signs in, authentication produces an `Identity`
//! with the same three fields. The identity is immutable for the lifetime of
//! the session it seeds.
//!
//! # Example
//!
//! ```rust
//! use accountrix_client::Identity;
//!
//! let identity = Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string());
//!
//! assert_eq!(identity.id, "42");
//! assert_eq!(identity.email, "alice@example.com");
//! ```

use serde::{Deserialize, Serialize};

/// A normalized user identity produced by a successful login.
///
/// Both login paths converge on this record: the credential exchange client
/// maps the backend's login response onto it, and the delegated OAuth flow
/// maps the provider's profile claims onto it.
///
/// # Thread Safety
///
/// `Identity` is `Send + Sync`, making it safe to share across threads.
///
/// # Serialization
///
/// The struct derives `Serialize` and `Deserialize` for easy storage and
/// transmission in JSON format.
///
/// # Example
///
/// ```rust
/// use accountrix_client::Identity;
///
/// let identity = Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string());
///
/// // Serialize to JSON
/// let json = serde_json::to_string(&identity).unwrap();
/// assert!(json.contains("alice"));
///
/// // Deserialize from JSON
/// let restored: Identity = serde_json::from_str(&json).unwrap();
/// assert_eq!(identity, restored);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user ID: the backend's numeric ID rendered as a string, or the
    /// delegated provider's subject. Always populated once authentication
    /// succeeds.
    pub id: String,

    /// The user's display name.
    pub display_name: String,

    /// The user's email address.
    pub email: String,
}

impl Identity {
    /// Creates a new `Identity` with all required fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accountrix_client::Identity;
    ///
    /// let identity = Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string());
    /// ```
    #[must_use]
    pub const fn new(id: String, display_name: String, email: String) -> Self {
        Self {
            id,
            display_name,
            email,
        }
    }
}

// Verify Identity is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Identity>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_identity() -> Identity {
        Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string())
    }

    #[test]
    fn test_identity_creation_with_all_fields() {
        let identity = sample_identity();

        assert_eq!(identity.id, "42");
        assert_eq!(identity.display_name, "alice");
        assert_eq!(identity.email, "alice@example.com");
    }

    #[test]
    fn test_identity_serialization_round_trip() {
        let identity = sample_identity();
        let json = serde_json::to_string(&identity).unwrap();
        let restored: Identity = serde_json::from_str(&json).unwrap();

        assert_eq!(identity, restored);
    }

    #[test]
    fn test_identity_deserialization_from_json() {
        let json = r#"{
            "id": "7",
            "display_name": "bob",
            "email": "bob@example.com"
        }"#;

        let identity: Identity = serde_json::from_str(json).unwrap();

        assert_eq!(identity.id, "7");
        assert_eq!(identity.display_name, "bob");
        assert_eq!(identity.email, "bob@example.com");
    }

    #[test]
    fn test_identity_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Identity>();
    }
}
