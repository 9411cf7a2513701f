//! # Accountrix Client
//!
//! A Rust client SDK for the Accountrix commerce backend, providing the
//! session/authentication bridge and the client-side resource store that
//! back the admin UI.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the API base URL and secrets
//! - Two login paths converging on one session token shape:
//!   direct credential exchange ([`auth::exchange_credentials`]) and a
//!   delegated OAuth provider ([`auth::oauth`])
//! - A shared, read-only session accessor ([`SessionHandle`]) with
//!   loading/authenticated/unauthenticated states
//! - Signed session persistence across page loads ([`auth::artifact`])
//! - A resource store ([`ResourceStore`]) caching catalog, categories,
//!   basket, orders, and the analytics summary, with per-resource
//!   loading/error state and deterministic overlapping-fetch handling
//!
//! ## Quick Start
//!
//! ```rust
//! use accountrix_client::{ApiBaseUrl, ClientConfig, SessionSecret};
//!
//! // Create configuration using the builder pattern
//! let config = ClientConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
//!     .session_secret(SessionSecret::new("session-signing-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Signing In
//!
//! Direct credentials:
//!
//! ```rust,ignore
//! use accountrix_client::auth::exchange_credentials;
//! use accountrix_client::{LoginOutcome, SessionHandle};
//!
//! let session = SessionHandle::new();
//! session.resolve_unauthenticated();
//!
//! match exchange_credentials(&config, "alice", "secret").await {
//!     Some(identity) => {
//!         let token = session.sign_in(&LoginOutcome::DirectCredential(identity));
//!         assert!(token.delegated_access_token.is_none());
//!     }
//!     None => { /* rejected or unreachable: no session either way */ }
//! }
//! ```
//!
//! Delegated provider:
//!
//! ```rust,ignore
//! use accountrix_client::auth::oauth::{begin_auth, validate_provider_callback};
//! use accountrix_client::LoginOutcome;
//!
//! // Step 1: Begin authorization
//! let result = begin_auth(&config)?;
//! // Redirect user to result.auth_url; store result.state
//!
//! // Step 2: Handle callback
//! let grant = validate_provider_callback(&config, &query, &stored_state).await?;
//! let token = session.sign_in(&LoginOutcome::DelegatedProvider(grant));
//! assert!(token.delegated_access_token.is_some());
//! ```
//!
//! ## Session Persistence
//!
//! Sessions persist across page loads as a signed, opaque artifact that
//! round-trips the full token losslessly within its validity window:
//!
//! ```rust
//! use accountrix_client::auth::artifact::{seal, unseal};
//! use accountrix_client::{Identity, SessionSecret, SessionToken};
//!
//! let secret = SessionSecret::new("session-signing-secret").unwrap();
//! let identity = Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string());
//! let token = SessionToken::assemble(&identity, None);
//!
//! let artifact = seal(&token, &secret);
//! assert_eq!(unseal(&artifact, &secret).unwrap(), token);
//! ```
//!
//! ## The Resource Store
//!
//! ```rust,ignore
//! use accountrix_client::resources::ProductFilter;
//! use accountrix_client::{ResourceStore, SessionHandle};
//!
//! let session = SessionHandle::new();
//! let store = ResourceStore::new(&config, session.clone());
//!
//! // Independent, overlapping fetches resolve last-write-wins by
//! // completion order; stale results are discarded silently.
//! store.fetch_products(Some(&ProductFilter::new().search("chair"))).await;
//! store.fetch_categories().await;
//!
//! let catalog = store.products();
//! if let Some(error) = catalog.error {
//!     eprintln!("catalog fetch failed: {error}");
//! }
//!
//! // The basket mutation is authorization-gated and merges quantities
//! // per product.
//! store.add_to_basket(42, 2).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One token shape**: Both login paths produce the same session token;
//!   consumers never branch on the login path
//! - **Errors stay local**: Fetch failures become resource-local error
//!   state, never uncaught faults

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod store;

// Re-export public types at crate root for convenience
pub use auth::{
    Identity, LoginOutcome, ProviderGrant, SessionHandle, SessionState, SessionToken,
};
pub use config::{
    ApiBaseUrl, ClientConfig, ClientConfigBuilder, ProviderClientId, ProviderClientSecret,
    ProviderConfig, SessionSecret,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export store types
pub use store::{CollectionSnapshot, ResourceKind, ResourceStore, StoreError};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    begin_auth, validate_provider_callback, BeginAuthResult, CallbackQuery, OAuthError, StateParam,
};
