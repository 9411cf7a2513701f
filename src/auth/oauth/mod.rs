//! Delegated OAuth login path.
//!
//! This module implements the authorization-code handoff against a
//! third-party identity provider:
//!
//! 1. **Authorization Initiation** ([`begin_auth`]): Generate an
//!    authorization URL and redirect the user to the provider to grant
//!    access.
//!
//! 2. **Callback Validation** ([`validate_provider_callback`]): When the
//!    user is redirected back, verify the state parameter, exchange the
//!    authorization code for tokens, and decode the ID token's profile
//!    claims into a [`ProviderGrant`](crate::ProviderGrant).
//!
//! The resulting grant feeds the session token assembler as a
//! [`LoginOutcome::DelegatedProvider`](crate::LoginOutcome::DelegatedProvider),
//! converging on the same token shape as direct credential login.
//!
//! # Security Features
//!
//! - **CSRF Protection**: State parameter prevents cross-site request forgery
//! - **Constant-Time Comparison**: Security-sensitive comparisons use
//!   constant-time algorithms to prevent timing attacks
//! - **ID Token Validation**: Profile claims are only trusted after the
//!   token's signature, expiry, and audience are verified
//!
//! # Example
//!
//! ```rust,ignore
//! use accountrix_client::auth::oauth::{begin_auth, validate_provider_callback};
//! use accountrix_client::LoginOutcome;
//!
//! // 1. Generate authorization URL
//! let result = begin_auth(&config)?;
//! // Store result.state, redirect user to result.auth_url
//!
//! // 2. Handle callback and sign in
//! let grant = validate_provider_callback(&config, &query, &stored_state).await?;
//! let token = session.sign_in(&LoginOutcome::DelegatedProvider(grant));
//! assert!(token.delegated_access_token.is_some());
//! ```

mod begin_auth;
mod callback;
mod error;
mod state;

pub use begin_auth::{begin_auth, BeginAuthResult};
pub use callback::{validate_provider_callback, CallbackQuery};
pub use error::OAuthError;
pub use state::StateParam;
