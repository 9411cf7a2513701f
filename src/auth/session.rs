//! Session token assembly and the session accessor.
//!
//! This module unifies the two login paths into one session representation:
//!
//! - [`LoginOutcome`]: tagged union of how a sign-in happened (direct
//!   credential exchange or delegated provider callback)
//! - [`SessionToken`]: the single token shape both paths converge on
//! - [`SessionState`] / [`SessionHandle`]: the read-only, shared view of the
//!   current session exposed to the rest of the application
//!
//! # Token Assembly
//!
//! [`SessionToken::assemble`] is the one merge function both paths feed
//! through. It runs once at initial sign-in; every subsequent session read
//! is a pass-through ([`SessionToken::refreshed`]) that copies fields
//! verbatim, so values set at sign-in (notably the delegated access token)
//! are never silently dropped on later reads.
//!
//! # Session States
//!
//! The accessor exposes three states, and consumers must treat them as
//! distinct: `Loading` (session determination in flight) is not
//! `Unauthenticated`, and authorization-gated actions are refused while
//! loading.
//!
//! ```text
//! Loading --------> Authenticated     (sign-in success / restore)
//! Loading --------> Unauthenticated   (no prior session)
//! Authenticated --> Unauthenticated   (sign-out)
//! Unauthenticated > Authenticated     (sign-in success)
//! ```
//!
//! # Example
//!
//! ```rust
//! use accountrix_client::{Identity, LoginOutcome, SessionHandle, SessionState};
//!
//! let handle = SessionHandle::new();
//! assert!(matches!(handle.current(), SessionState::Loading));
//!
//! // Startup restoration found no persisted session
//! handle.resolve_unauthenticated();
//!
//! // Direct credential sign-in
//! let identity = Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string());
//! let token = handle.sign_in(&LoginOutcome::DirectCredential(identity));
//! assert!(token.delegated_access_token.is_none());
//! assert!(handle.is_authenticated());
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::auth::Identity;

/// A delegated provider grant: the provider's access token plus the
/// identity resolved from its profile claims.
///
/// Produced by the OAuth callback validation and consumed by the session
/// token assembler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderGrant {
    /// The identity resolved from the provider's profile claims.
    pub identity: Identity,
    /// The provider access token, kept for presenting to downstream services.
    pub access_token: String,
}

/// How a sign-in happened.
///
/// Downstream code never branches on the variant except to test for the
/// presence of a delegated access token: both variants are fed through the
/// same merge function and produce the same token shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Direct credential exchange against the backend succeeded.
    DirectCredential(Identity),
    /// The delegated provider completed its authorization-code handoff.
    DelegatedProvider(ProviderGrant),
}

impl LoginOutcome {
    /// Returns the identity this outcome resolved to.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        match self {
            Self::DirectCredential(identity) => identity,
            Self::DelegatedProvider(grant) => &grant.identity,
        }
    }

    /// Returns the delegated access token, when the provider supplied one.
    #[must_use]
    pub fn delegated_access_token(&self) -> Option<&str> {
        match self {
            Self::DirectCredential(_) => None,
            Self::DelegatedProvider(grant) => Some(&grant.access_token),
        }
    }
}

/// The unified session token both login paths converge on.
///
/// `identity_id` is always populated once authentication succeeds,
/// regardless of path. `delegated_access_token` is present only when the
/// delegated provider supplied one.
///
/// # Serialization
///
/// The token serializes losslessly; the session artifact round-trips it
/// across page loads (see [`crate::auth::artifact`]).
///
/// # Example
///
/// ```rust
/// use accountrix_client::{Identity, SessionToken};
///
/// let identity = Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string());
/// let token = SessionToken::assemble(&identity, Some("provider-token".to_string()));
///
/// assert_eq!(token.identity_id, "42");
/// assert_eq!(token.delegated_access_token.as_deref(), Some("provider-token"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The authenticated user's ID.
    pub identity_id: String,

    /// The authenticated user's display name.
    pub display_name: String,

    /// The authenticated user's email address.
    pub email: String,

    /// Access token from the delegated provider, when sign-in used (or
    /// included) the OAuth path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegated_access_token: Option<String>,
}

impl SessionToken {
    /// Assembles a session token from an identity and an optional delegated
    /// access token.
    ///
    /// This is the single merge function both login paths feed through. The
    /// delegated token is attached whenever one is present, independent of
    /// which path resolved the identity, so later requests can present it
    /// to downstream services.
    #[must_use]
    pub fn assemble(identity: &Identity, delegated_access_token: Option<String>) -> Self {
        Self {
            identity_id: identity.id.clone(),
            display_name: identity.display_name.clone(),
            email: identity.email.clone(),
            delegated_access_token,
        }
    }

    /// Assembles a session token from a login outcome.
    ///
    /// Equivalent to calling [`Self::assemble`] with the outcome's identity
    /// and delegated token.
    #[must_use]
    pub fn from_outcome(outcome: &LoginOutcome) -> Self {
        Self::assemble(
            outcome.identity(),
            outcome.delegated_access_token().map(ToString::to_string),
        )
    }

    /// Produces the token handed out on a subsequent session read.
    ///
    /// This is a pass-through, not a re-merge: every field is copied
    /// verbatim, so nothing set at sign-in is dropped.
    #[must_use]
    pub fn refreshed(&self) -> Self {
        self.clone()
    }
}

/// The three observable session states.
///
/// Consumers must treat `Loading` as distinct from `Unauthenticated` and
/// must not perform authorization-gated actions while loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Session determination is in flight (startup restoration running).
    Loading,
    /// A session is present.
    Authenticated(SessionToken),
    /// No session.
    Unauthenticated,
}

impl SessionState {
    /// Returns `true` if a session is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns the session token, if authenticated.
    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        match self {
            Self::Authenticated(token) => Some(token),
            _ => None,
        }
    }
}

/// Shared, read-only accessor for the current session.
///
/// The handle is cheap to clone; all clones observe the same state.
/// Consumers read snapshots via [`SessionHandle::current`] and can never
/// mutate the session directly — transitions happen only through the named
/// operations below, which enforce the state machine.
///
/// # Thread Safety
///
/// `SessionHandle` is `Send + Sync` and safe to share across async tasks.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    /// Creates a handle in the `Loading` state.
    ///
    /// Startup restoration should follow with either [`Self::restore`]
    /// (a persisted session was found) or [`Self::resolve_unauthenticated`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState::Loading)),
        }
    }

    /// Returns a snapshot of the current session state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.read().clone()
    }

    /// Returns the current session token, if authenticated.
    ///
    /// The token is a pass-through copy of the one assembled at sign-in
    /// (see [`SessionToken::refreshed`]).
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        self.read().token().map(SessionToken::refreshed)
    }

    /// Returns `true` if a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Signs in: assembles a token from the outcome and moves to
    /// `Authenticated`.
    ///
    /// Valid from any state. Re-invoking while authenticated performs a
    /// full token re-merge, which is the only observable
    /// authenticated-to-authenticated transition.
    pub fn sign_in(&self, outcome: &LoginOutcome) -> SessionToken {
        let token = SessionToken::from_outcome(outcome);
        *self.write() = SessionState::Authenticated(token.clone());
        token
    }

    /// Restores a previously persisted session at startup.
    ///
    /// Moves `Loading` to `Authenticated` without re-authentication. Has
    /// no effect once restoration has already resolved: an established
    /// state is only changed through `sign_in`/`sign_out`.
    pub fn restore(&self, token: SessionToken) {
        let mut state = self.write();
        if matches!(*state, SessionState::Loading) {
            *state = SessionState::Authenticated(token);
        }
    }

    /// Completes startup restoration with no prior session.
    ///
    /// Moves `Loading` to `Unauthenticated`.
    pub fn resolve_unauthenticated(&self) {
        let mut state = self.write();
        if matches!(*state, SessionState::Loading) {
            *state = SessionState::Unauthenticated;
        }
    }

    /// Signs out, destroying the session.
    pub fn sign_out(&self) {
        *self.write() = SessionState::Unauthenticated;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

// Verify session types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionToken>();
    assert_send_sync::<SessionHandle>();
};
