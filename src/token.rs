//! Access token inspection.
//!
//! Tokens issued by Cognito are opaque signed JWTs; this crate only
//! reads the embedded `exp` claim to decide whether a cached token is
//! still usable. No signature verification happens here - the token is
//! validated by the service that consumes it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// Extract the `exp` claim (seconds since epoch) from a JWT.
///
/// Returns `None` if the token is not a decodable JWT or carries no
/// `exp` claim. Cognito refresh tokens are opaque blobs, not JWTs, so
/// they always decode to `None`.
pub fn expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}

/// Whether the token's embedded expiry has passed.
///
/// Tokens without a readable `exp` claim are treated as expired.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    match expiry(token) {
        Some(exp) => exp < chrono::Utc::now().timestamp(),
        None => true,
    }
}
