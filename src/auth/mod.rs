//! Authentication types for the Accountrix client.
//!
//! This module provides the session/authentication bridge: two login paths
//! converging on one session representation, plus signed persistence.
//!
//! # Overview
//!
//! - [`Identity`]: The normalized user record both login paths produce
//! - [`exchange_credentials`]: Direct credential exchange against the backend
//! - [`oauth`]: The delegated provider's authorization-code flow
//! - [`SessionToken`] / [`LoginOutcome`]: Token assembly from either path
//! - [`SessionHandle`] / [`SessionState`]: The shared session accessor
//! - [`artifact`]: Signed session persistence across page loads
//!
//! # Login Paths
//!
//! The client supports two ways to sign in:
//!
//! - **Direct credentials**: username/password exchanged with the backend's
//!   login endpoint. Yields an [`Identity`] or "no identity" — rejection and
//!   transport failure are indistinguishable to the caller.
//! - **Delegated provider**: an OAuth authorization-code handoff. Yields a
//!   provider grant carrying profile claims and an access token.
//!
//! Both feed [`SessionToken::assemble`]; the only observable difference in
//! the resulting token is whether `delegated_access_token` is present.
//!
//! # Example
//!
//! ```rust,ignore
//! use accountrix_client::auth::exchange_credentials;
//! use accountrix_client::{LoginOutcome, SessionHandle};
//!
//! let session = SessionHandle::new();
//! session.resolve_unauthenticated();
//!
//! if let Some(identity) = exchange_credentials(&config, "alice", "secret").await {
//!     session.sign_in(&LoginOutcome::DirectCredential(identity));
//! }
//! ```

pub mod artifact;
mod credentials;
mod identity;
pub mod oauth;
pub mod session;

pub use credentials::exchange_credentials;
pub use identity::Identity;
pub use session::{LoginOutcome, ProviderGrant, SessionHandle, SessionState, SessionToken};
