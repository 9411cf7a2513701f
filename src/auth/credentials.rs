//! Direct credential exchange against the backend authentication endpoint.
//!
//! This module provides [`exchange_credentials`], which wraps the single
//! `POST /auth/login/` call and translates the outcome into either a
//! normalized [`Identity`] or "no identity".
//!
//! # Overview
//!
//! The caller (the session token assembler) treats both "rejected" and
//! "unreachable" identically as "authentication did not succeed", so this
//! function never returns an error:
//!
//! - A successful response yields `Some(Identity)`.
//! - Any non-success status yields `None` (the normal bad-credentials outcome).
//! - A transport failure (network unreachable, timeout, malformed response)
//!   also yields `None`; the failure is logged for diagnostics.
//!
//! # Example
//!
//! ```rust,ignore
//! use accountrix_client::auth::exchange_credentials;
//!
//! let identity = exchange_credentials(&config, "alice", "secret").await;
//! match identity {
//!     Some(identity) => println!("Signed in as {}", identity.display_name),
//!     None => println!("Cannot sign in"),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::config::ClientConfig;

/// Request body for the backend login endpoint.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Successful response from the backend login endpoint.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: LoginUser,
}

/// User record inside the login response.
#[derive(Debug, Deserialize)]
struct LoginUser {
    id: u64,
    username: String,
    email: String,
}

/// Exchanges a username/password pair for an [`Identity`].
///
/// Performs one network exchange against `POST /auth/login/`. Empty
/// credentials short-circuit to `None` without a network call.
///
/// This function never fails: rejected credentials and transport failures
/// both yield `None`. Transport failures are logged via `tracing::warn!`
/// so they remain visible for diagnostics without surfacing to the caller.
///
/// # Example
///
/// ```rust,ignore
/// let identity = exchange_credentials(&config, "alice", "wrong-password").await;
/// assert!(identity.is_none());
/// ```
pub async fn exchange_credentials(
    config: &ClientConfig,
    username: &str,
    password: &str,
) -> Option<Identity> {
    if username.is_empty() || password.is_empty() {
        return None;
    }

    let login_url = config.api_base_url().join("/auth/login/");
    let request_body = LoginRequest { username, password };

    let client = reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(config.request_timeout())
        .build()
        .ok()?;

    let response = match client.post(&login_url).json(&request_body).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Credential exchange transport failure: {e}");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!(
            "Credential exchange rejected with status {}",
            response.status().as_u16()
        );
        return None;
    }

    match response.json::<LoginResponse>().await {
        Ok(body) => Some(Identity::new(
            body.user.id.to_string(),
            body.user.username,
            body.user.email,
        )),
        Err(e) => {
            tracing::warn!("Credential exchange returned a malformed body: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiBaseUrl, SessionSecret};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ClientConfig {
        ClientConfig::builder()
            .api_base_url(ApiBaseUrl::new(server.uri()).unwrap())
            .session_secret(SessionSecret::new("test-secret").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_successful_exchange_returns_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login/"))
            .and(body_json(serde_json::json!({
                "username": "alice",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": { "id": 42, "username": "alice", "email": "alice@example.com" }
            })))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let identity = exchange_credentials(&config, "alice", "secret").await;

        let identity = identity.expect("expected an identity");
        assert_eq!(identity.id, "42");
        assert_eq!(identity.display_name, "alice");
        assert_eq!(identity.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_rejected_credentials_yield_no_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login/"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let identity = exchange_credentials(&config, "alice", "wrong").await;

        assert!(identity.is_none());
    }

    #[tokio::test]
    async fn test_empty_credentials_skip_the_network() {
        let server = MockServer::start().await;
        // No mock mounted: any request would return 404 and the test
        // below would still pass, so assert on received requests instead.
        let config = config_for(&server);

        assert!(exchange_credentials(&config, "", "secret").await.is_none());
        assert!(exchange_credentials(&config, "alice", "").await.is_none());

        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_yields_no_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let identity = exchange_credentials(&config, "alice", "secret").await;

        assert!(identity.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_no_identity() {
        // Point at a closed port; the connection error must not panic or
        // propagate.
        let config = ClientConfig::builder()
            .api_base_url(ApiBaseUrl::new("http://127.0.0.1:1").unwrap())
            .session_secret(SessionSecret::new("test-secret").unwrap())
            .build()
            .unwrap();

        let identity = exchange_credentials(&config, "alice", "secret").await;

        assert!(identity.is_none());
    }
}
