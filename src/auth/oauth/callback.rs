//! Callback validation and code exchange for the delegated provider.
//!
//! This module provides the [`validate_provider_callback`] function for
//! validating the provider's redirect back to the application and exchanging
//! the authorization code for tokens.
//!
//! # Overview
//!
//! After a user authorizes the application, the provider redirects them to
//! the registered callback URL with query parameters including an
//! authorization code. This function:
//!
//! 1. Verifies the state parameter matches (constant-time) to prevent CSRF
//! 2. Exchanges the authorization code at the provider's token endpoint
//! 3. Decodes the ID token's profile claims into an [`Identity`]
//! 4. Returns a [`ProviderGrant`] ready for session token assembly
//!
//! # Example
//!
//! ```rust,ignore
//! use accountrix_client::auth::oauth::{validate_provider_callback, CallbackQuery};
//! use accountrix_client::LoginOutcome;
//!
//! let grant = validate_provider_callback(&config, &query, &stored_state).await?;
//! let token = session.sign_in(&LoginOutcome::DelegatedProvider(grant));
//! ```

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::session::ProviderGrant;
use crate::auth::Identity;
use crate::config::{ClientConfig, ProviderConfig};

/// Leeway for ID token time-based claims validation (10 seconds).
const ID_TOKEN_LEEWAY_SECS: u64 = 10;

/// Query parameters received on the provider callback.
#[derive(Clone, Debug, Deserialize)]
pub struct CallbackQuery {
    /// The authorization code to exchange for tokens.
    pub code: String,
    /// The state parameter echoed back by the provider.
    pub state: String,
}

/// Form body for the authorization-code exchange.
#[derive(Debug, serde::Serialize)]
struct CodeExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    grant_type: &'a str,
    redirect_uri: &'a str,
}

/// Successful response from the provider token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    id_token: String,
}

/// Profile claims carried in the provider's ID token.
#[derive(Debug, Deserialize)]
struct ProfileClaims {
    /// Subject - the provider's stable user identifier.
    sub: String,
    /// The user's display name.
    name: String,
    /// The user's email address.
    email: String,
}

/// Validates a provider callback and exchanges the code for a grant.
///
/// This function performs the complete callback validation flow:
///
/// 1. **State Verification**: Compares the received state with the expected
///    state using constant-time comparison
/// 2. **Code Exchange**: POSTs to the provider's token endpoint to exchange
///    the authorization code for an access token and ID token
/// 3. **Claim Decoding**: Decodes and validates the ID token (HS256, keyed
///    with the provider client secret, audience bound to the client ID) and
///    resolves its profile claims to an [`Identity`]
///
/// # Arguments
///
/// * `config` - Client configuration (must have provider settings)
/// * `callback` - The query parameters from the provider callback
/// * `expected_state` - The state stored when `begin_auth()` was called
///
/// # Returns
///
/// A [`ProviderGrant`] carrying the access token and resolved identity,
/// ready to feed into
/// [`SessionHandle::sign_in`](crate::SessionHandle::sign_in) as a
/// [`LoginOutcome::DelegatedProvider`](crate::LoginOutcome::DelegatedProvider).
///
/// # Errors
///
/// - [`OAuthError::MissingProviderConfig`]: No provider settings configured
/// - [`OAuthError::StateMismatch`]: State parameter doesn't match expected
/// - [`OAuthError::InvalidCallback`]: The callback carries no code
/// - [`OAuthError::TokenExchangeFailed`]: Code exchange request failed
/// - [`OAuthError::InvalidIdToken`]: The ID token failed decoding/validation
pub async fn validate_provider_callback(
    config: &ClientConfig,
    callback: &CallbackQuery,
    expected_state: &StateParam,
) -> Result<ProviderGrant, OAuthError> {
    let provider = config.provider().ok_or(OAuthError::MissingProviderConfig)?;

    // Step 1: Verify state matches (constant-time comparison)
    if !expected_state.matches(&callback.state) {
        return Err(OAuthError::StateMismatch {
            expected: expected_state.as_ref().to_string(),
            received: callback.state.clone(),
        });
    }

    if callback.code.is_empty() {
        return Err(OAuthError::InvalidCallback {
            reason: "Callback carries no authorization code".to_string(),
        });
    }

    // Step 2: Exchange authorization code for tokens
    let request_body = CodeExchangeRequest {
        client_id: provider.client_id().as_ref(),
        client_secret: provider.client_secret().as_ref(),
        code: &callback.code,
        grant_type: "authorization_code",
        redirect_uri: provider.redirect_url(),
    };

    let client = reqwest::Client::new();
    let response = client
        .post(provider.token_endpoint())
        .form(&request_body)
        .send()
        .await
        .map_err(|e| OAuthError::TokenExchangeFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(OAuthError::TokenExchangeFailed {
            status,
            message: error_body,
        });
    }

    let token_response: TokenResponse =
        response
            .json()
            .await
            .map_err(|e| OAuthError::TokenExchangeFailed {
                status,
                message: format!("Failed to parse token response: {e}"),
            })?;

    // Step 3: Decode the ID token's profile claims
    let claims = decode_profile_claims(&token_response.id_token, provider)?;

    Ok(ProviderGrant {
        identity: Identity::new(claims.sub, claims.name, claims.email),
        access_token: token_response.access_token,
    })
}

/// Decodes and validates the provider's ID token.
fn decode_profile_claims(
    id_token: &str,
    provider: &ProviderConfig,
) -> Result<ProfileClaims, OAuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = ID_TOKEN_LEEWAY_SECS;
    validation.set_audience(&[provider.client_id().as_ref()]);

    let key = DecodingKey::from_secret(provider.client_secret().as_ref().as_bytes());

    decode::<ProfileClaims>(id_token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| OAuthError::InvalidIdToken {
            reason: format!("Error decoding ID token: {e}"),
        })
}
