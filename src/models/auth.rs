//! Authentication-related types.

use serde::{Deserialize, Serialize};

/// Identity triple naming a user within a Cognito user pool app client.
///
/// The triple determines where credentials are cached: two invocations
/// with the same triple share one cache slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolIdentity {
    /// Cognito username.
    pub username: String,
    /// User pool id (e.g. `us-east-1_AbCdEfGhI`).
    pub user_pool_id: String,
    /// App client id within the pool.
    pub client_id: String,
}

impl PoolIdentity {
    /// Create a new identity triple.
    pub fn new(
        username: impl Into<String>,
        user_pool_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            user_pool_id: user_pool_id.into(),
            client_id: client_id.into(),
        }
    }

    /// Deterministic cache key for this identity.
    ///
    /// The key is the JSON array serialization of
    /// `[username, user_pool_id, client_id]`, in that order.
    #[must_use]
    pub fn cache_key(&self) -> String {
        serde_json::json!([self.username, self.user_pool_id, self.client_id]).to_string()
    }

    /// AWS region embedded in the user pool id.
    pub fn region(&self) -> crate::error::Result<&str> {
        crate::config::pool_region(&self.user_pool_id)
    }
}

/// Access/refresh token pair issued by Cognito.
///
/// Serializes to the cache value format `{"accessToken", "refreshToken"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Short-lived access token (JWT).
    pub access_token: String,
    /// Long-lived refresh token (opaque).
    pub refresh_token: String,
}

/// Request body for the InitiateAuth operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthRequest {
    pub auth_flow: &'static str,
    pub client_id: String,
    pub auth_parameters: AuthParameters,
}

/// `AuthParameters` map for the USER_PASSWORD_AUTH flow.
#[derive(Debug, Serialize)]
pub(crate) struct AuthParameters {
    #[serde(rename = "USERNAME")]
    pub username: String,
    #[serde(rename = "PASSWORD")]
    pub password: String,
}

/// Response body for the InitiateAuth operation.
///
/// `authentication_result` is absent when the pool demands a challenge
/// (MFA, forced password change), in which case `challenge_name` is set.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InitiateAuthResponse {
    #[serde(default)]
    pub authentication_result: Option<AuthenticationResult>,
    #[serde(default)]
    pub challenge_name: Option<String>,
}

/// Token material issued on successful authentication.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticationResult {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Cognito error envelope: `{"__type": "...", "message": "..."}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CognitoErrorResponse {
    #[serde(rename = "__type")]
    pub kind: Option<String>,
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
