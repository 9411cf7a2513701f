//! Signed session persistence.
//!
//! This module seals the full [`SessionToken`] into an opaque, signed
//! artifact the browser can hold across page loads, and unseals it back.
//! The artifact round-trips the token losslessly within its validity
//! window; tampered or expired artifacts are rejected.
//!
//! # Format
//!
//! `base64url(payload) . base64url(hmac-sha256(payload))` where the payload
//! is a JSON envelope `{ token, issued_at, expires_at }`. The encoding is an
//! implementation detail — callers must treat the artifact as opaque.
//!
//! # Security
//!
//! The signature is HMAC-SHA256 keyed with the configured
//! [`SessionSecret`](crate::SessionSecret); verification uses constant-time
//! comparison. The signature authenticates the payload, it does not encrypt
//! it — the token carries no credentials besides the delegated access token,
//! which the provider already scoped.
//!
//! # Example
//!
//! ```rust
//! use accountrix_client::auth::artifact::{seal, unseal};
//! use accountrix_client::{Identity, SessionSecret, SessionToken};
//!
//! let secret = SessionSecret::new("signing-secret").unwrap();
//! let identity = Identity::new("42".to_string(), "alice".to_string(), "alice@example.com".to_string());
//! let token = SessionToken::assemble(&identity, None);
//!
//! let artifact = seal(&token, &secret);
//! let restored = unseal(&artifact, &secret).unwrap();
//! assert_eq!(restored, token);
//! ```

use base64::prelude::*;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::auth::SessionToken;
use crate::config::SessionSecret;

type HmacSha256 = Hmac<Sha256>;

/// Default artifact validity window in seconds (30 days).
const DEFAULT_VALIDITY_SECS: i64 = 30 * 24 * 60 * 60;

/// Errors that can occur when unsealing a session artifact.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    /// The artifact is not in the expected `payload.signature` form, or the
    /// payload does not decode to a session envelope.
    #[error("Session artifact is malformed")]
    Malformed,

    /// The signature does not match the payload.
    #[error("Session artifact signature is invalid")]
    InvalidSignature,

    /// The artifact's validity window has passed.
    #[error("Session artifact expired at {expired_at}")]
    Expired {
        /// When the artifact expired.
        expired_at: DateTime<Utc>,
    },
}

/// The signed payload carried inside an artifact.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    token: SessionToken,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Seals a session token into a signed artifact with the default
/// 30-day validity window.
#[must_use]
pub fn seal(token: &SessionToken, secret: &SessionSecret) -> String {
    seal_with_validity(token, secret, Duration::seconds(DEFAULT_VALIDITY_SECS))
}

/// Seals a session token into a signed artifact with an explicit
/// validity window.
///
/// # Panics
///
/// Panics if the envelope cannot be serialized, which cannot happen for
/// the fixed envelope shape.
#[must_use]
pub fn seal_with_validity(
    token: &SessionToken,
    secret: &SessionSecret,
    validity: Duration,
) -> String {
    let now = Utc::now();
    let envelope = Envelope {
        token: token.clone(),
        issued_at: now,
        expires_at: now + validity,
    };

    let payload = serde_json::to_vec(&envelope).expect("envelope serialization cannot fail");
    let signature = sign(&payload, secret);

    format!(
        "{}.{}",
        BASE64_URL_SAFE_NO_PAD.encode(&payload),
        BASE64_URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Unseals a session artifact, returning the token it carries.
///
/// # Errors
///
/// - [`ArtifactError::Malformed`] if the artifact does not parse
/// - [`ArtifactError::InvalidSignature`] if the payload was tampered with
///   or sealed under a different secret
/// - [`ArtifactError::Expired`] if the validity window has passed
pub fn unseal(artifact: &str, secret: &SessionSecret) -> Result<SessionToken, ArtifactError> {
    let (payload_part, signature_part) =
        artifact.split_once('.').ok_or(ArtifactError::Malformed)?;

    let payload = BASE64_URL_SAFE_NO_PAD
        .decode(payload_part)
        .map_err(|_| ArtifactError::Malformed)?;
    let received_signature = BASE64_URL_SAFE_NO_PAD
        .decode(signature_part)
        .map_err(|_| ArtifactError::Malformed)?;

    // Verify the signature before trusting any of the payload's contents
    let expected_signature = sign(&payload, secret);
    let matches: bool = expected_signature
        .as_slice()
        .ct_eq(received_signature.as_slice())
        .into();
    if !matches {
        return Err(ArtifactError::InvalidSignature);
    }

    let envelope: Envelope =
        serde_json::from_slice(&payload).map_err(|_| ArtifactError::Malformed)?;

    if Utc::now() > envelope.expires_at {
        return Err(ArtifactError::Expired {
            expired_at: envelope.expires_at,
        });
    }

    Ok(envelope.token)
}

/// Computes the HMAC-SHA256 signature of a payload.
fn sign(payload: &[u8], secret: &SessionSecret) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret.as_ref().as_bytes())
        .expect("HMAC can take a key of any size");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}
