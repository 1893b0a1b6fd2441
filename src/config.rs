//! Configuration constants and URL templates for the Cognito IdP API.

use std::time::Duration;

/// Cognito IdP endpoint template.
/// `{region}` is replaced at runtime.
pub const COGNITO_IDP_URL_TEMPLATE: &str = "https://cognito-idp.{region}.amazonaws.com/";

/// `X-Amz-Target` value for the InitiateAuth operation.
pub const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";

/// Content type for Cognito IdP requests.
pub const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Auth flow used for password-based login.
pub const USER_PASSWORD_AUTH_FLOW: &str = "USER_PASSWORD_AUTH";

/// Connect timeout for HTTP requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for IdP requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Validate that a region string matches the expected AWS region format.
///
/// Valid format: `xx-xxxx-N` (e.g., `us-east-1`, `eu-west-2`, `ap-southeast-1`).
fn validate_region(region: &str) -> Result<(), crate::error::Error> {
    use std::sync::LazyLock;
    static REGION_RE: LazyLock<regex_lite::Regex> =
        LazyLock::new(|| regex_lite::Regex::new(r"^[a-z]{2}-[a-z]+-\d+$").unwrap());
    if REGION_RE.is_match(region) {
        Ok(())
    } else {
        Err(crate::error::Error::Config(format!(
            "Invalid AWS region format: '{}' (expected pattern like 'us-east-1')",
            region
        )))
    }
}

/// Extract the region from a user pool id.
///
/// Pool ids have the form `{region}_{poolName}` (e.g. `us-east-1_AbCdEfGhI`).
pub fn pool_region(user_pool_id: &str) -> Result<&str, crate::error::Error> {
    let region = user_pool_id.split('_').next().unwrap_or_default();
    validate_region(region).map_err(|_| {
        crate::error::Error::Config(format!(
            "Invalid user pool id: '{}' (expected pattern like 'us-east-1_AbCdEfGhI')",
            user_pool_id
        ))
    })?;
    Ok(region)
}

/// Returns the Cognito IdP endpoint for the given region.
pub fn cognito_idp_url(region: &str) -> Result<String, crate::error::Error> {
    validate_region(region)?;
    Ok(COGNITO_IDP_URL_TEMPLATE.replace("{region}", region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_region_valid() {
        assert!(validate_region("us-east-1").is_ok());
        assert!(validate_region("eu-west-2").is_ok());
        assert!(validate_region("ap-southeast-1").is_ok());
    }

    #[test]
    fn test_validate_region_invalid() {
        assert!(validate_region("invalid").is_err());
        assert!(validate_region("US-EAST-1").is_err());
        assert!(validate_region("us-east-").is_err());
        assert!(validate_region("../etc/passwd").is_err());
        assert!(validate_region("us-east-1; DROP TABLE").is_err());
    }

    #[test]
    fn test_pool_region() {
        assert_eq!(pool_region("us-east-1_AbCdEfGhI").unwrap(), "us-east-1");
        assert_eq!(pool_region("eu-west-2_x9YzAbCdE").unwrap(), "eu-west-2");
    }

    #[test]
    fn test_pool_region_invalid() {
        assert!(pool_region("AbCdEfGhI").is_err());
        assert!(pool_region("").is_err());
        assert!(pool_region("_us-east-1").is_err());
    }

    #[test]
    fn test_cognito_idp_url() {
        assert_eq!(
            cognito_idp_url("us-east-1").unwrap(),
            "https://cognito-idp.us-east-1.amazonaws.com/"
        );
        assert!(cognito_idp_url("../hack").is_err());
    }
}
