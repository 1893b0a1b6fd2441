//! Password-based login against the Cognito IdP API.

use tracing::{debug, info};

use crate::config;
use crate::error::{Error, Result};
use crate::models::auth::{
    AuthParameters, CognitoErrorResponse, Credentials, InitiateAuthRequest, InitiateAuthResponse,
    PoolIdentity,
};

/// Authenticate with the USER_PASSWORD_AUTH flow and extract the issued
/// token pair.
///
/// POST `https://cognito-idp.{region}.amazonaws.com/`
/// Target: `AWSCognitoIdentityProviderService.InitiateAuth`
///
/// Failures carry whatever Cognito reported (wrong credentials,
/// disabled flow, throttling); nothing is retried here.
pub async fn authenticate(
    client: &reqwest::Client,
    endpoint: &str,
    identity: &PoolIdentity,
    password: &str,
) -> Result<Credentials> {
    let payload = InitiateAuthRequest {
        auth_flow: config::USER_PASSWORD_AUTH_FLOW,
        client_id: identity.client_id.clone(),
        auth_parameters: AuthParameters {
            username: identity.username.clone(),
            password: password.to_string(),
        },
    };

    info!(username = %identity.username, "Authenticating against Cognito...");

    let response = client
        .post(endpoint)
        .header("Content-Type", config::AMZ_JSON_CONTENT_TYPE)
        .header("X-Amz-Target", config::INITIATE_AUTH_TARGET)
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let envelope: CognitoErrorResponse = serde_json::from_str(&body).unwrap_or_default();
        // __type may carry a service namespace prefix: "ns#NotAuthorizedException"
        let kind = envelope
            .kind
            .as_deref()
            .and_then(|k| k.rsplit('#').next())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status));
        let message = envelope.message.unwrap_or(body);
        return Err(Error::Cognito { kind, message });
    }

    let data: InitiateAuthResponse = response
        .json()
        .await
        .map_err(|e| Error::MalformedResponse(format!("Failed to parse InitiateAuth response: {}", e)))?;

    let result = match data.authentication_result {
        Some(result) => result,
        None => {
            // Pools configured for MFA or forced password change answer
            // with a challenge instead of tokens; challenge handshakes
            // are not supported.
            let challenge = data.challenge_name.unwrap_or_else(|| "UNKNOWN".into());
            return Err(Error::Cognito {
                kind: challenge,
                message: "Authentication challenge required but not supported".into(),
            });
        }
    };

    let access_token = result
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::MalformedResponse("Response does not contain AccessToken".into()))?;
    let refresh_token = result
        .refresh_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::MalformedResponse("Response does not contain RefreshToken".into()))?;

    debug!("Authentication succeeded");
    Ok(Credentials {
        access_token,
        refresh_token,
    })
}
