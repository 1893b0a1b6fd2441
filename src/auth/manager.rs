//! Credential lifecycle manager.
//!
//! Composes cache lookup, password login, and persistence into the
//! single operation the host tag calls.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config;
use crate::error::{Error, Result};
use crate::models::auth::PoolIdentity;
use crate::storage::Store;

use super::{cache, password};

/// Manages the Cognito credential lifecycle for one identity.
///
/// Every call consults the store first, so independent invocations
/// (and independent processes sharing a store) reuse each other's
/// tokens.
pub struct CognitoAuthManager {
    identity: PoolIdentity,
    password: String,
    client: reqwest::Client,
    store: Arc<dyn Store>,
    endpoint: String,
}

impl CognitoAuthManager {
    /// Create a builder for configuring the manager.
    pub fn builder() -> CognitoAuthManagerBuilder {
        CognitoAuthManagerBuilder::new()
    }

    /// The identity this manager authenticates.
    pub fn identity(&self) -> &PoolIdentity {
        &self.identity
    }

    /// The IdP endpoint in use.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get a valid access token, re-authenticating if necessary.
    ///
    /// 1. Restore cached credentials and return the access token if it
    ///    has not expired.
    /// 2. Otherwise authenticate with the password flow, persist the
    ///    new pair under the cache key, and return the fresh token.
    pub async fn access_token(&self) -> Result<String> {
        if let Some(credentials) = cache::restore(&*self.store, &self.identity).await? {
            debug!("Using cached access token");
            return Ok(credentials.access_token);
        }

        let credentials =
            password::authenticate(&self.client, &self.endpoint, &self.identity, &self.password)
                .await?;
        cache::persist(&*self.store, &self.identity, &credentials).await?;
        info!(username = %self.identity.username, "New credentials issued and cached");

        Ok(credentials.access_token)
    }
}

impl std::fmt::Debug for CognitoAuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CognitoAuthManager")
            .field("identity", &self.identity)
            .field("endpoint", &self.endpoint)
            .field("store", &self.store.name())
            .finish()
    }
}

/// Builder for [`CognitoAuthManager`].
pub struct CognitoAuthManagerBuilder {
    username: Option<String>,
    password: Option<String>,
    user_pool_id: Option<String>,
    client_id: Option<String>,
    store: Option<Arc<dyn Store>>,
    reqwest_client: Option<reqwest::Client>,
    endpoint: Option<String>,
}

impl CognitoAuthManagerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            username: None,
            password: None,
            user_pool_id: None,
            client_id: None,
            store: None,
            reqwest_client: None,
            endpoint: None,
        }
    }

    /// Set the Cognito username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the user pool id.
    pub fn user_pool_id(mut self, user_pool_id: impl Into<String>) -> Self {
        self.user_pool_id = Some(user_pool_id.into());
        self
    }

    /// Set the app client id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the credential store.
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set a custom reqwest client (useful for testing or custom TLS config).
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Override the IdP endpoint instead of deriving it from the pool
    /// region (used by tests against a local server).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the manager, validating arguments and deriving the endpoint.
    pub fn build(self) -> Result<CognitoAuthManager> {
        let username = required(self.username, "Username")?;
        let password = required(self.password, "Password")?;
        let user_pool_id = required(self.user_pool_id, "UserPoolId")?;
        let client_id = required(self.client_id, "ClientId")?;

        let store = self
            .store
            .ok_or_else(|| Error::Config("No store configured - provide one with .store(...)".into()))?;

        let identity = PoolIdentity::new(username, user_pool_id, client_id);

        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => config::cognito_idp_url(identity.region()?)?,
        };

        let client = match self.reqwest_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .connect_timeout(config::CONNECT_TIMEOUT)
                .timeout(config::REQUEST_TIMEOUT)
                .build()?,
        };

        Ok(CognitoAuthManager {
            identity,
            password,
            client,
            store,
            endpoint,
        })
    }
}

impl Default for CognitoAuthManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingArgument(name.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Credentials;
    use crate::storage::MemoryStore;
    use crate::token::tests::make_jwt;

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn manager(store: Arc<MemoryStore>, endpoint: &str) -> CognitoAuthManager {
        CognitoAuthManager::builder()
            .username("alice")
            .user_pool_id("us-east-1_AbCdEfGhI")
            .client_id("client1")
            .password("hunter2")
            .store(store)
            .endpoint(endpoint)
            .build()
            .unwrap()
    }

    fn auth_body(access_token: &str) -> String {
        format!(
            r#"{{"AuthenticationResult":{{"AccessToken":"{}","RefreshToken":"opaque-rt","ExpiresIn":3600,"TokenType":"Bearer"}}}}"#,
            access_token
        )
    }

    #[tokio::test]
    async fn test_cold_cache_authenticates_and_persists() {
        let jwt = make_jwt(now() + 3600);
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .expect(1)
            .with_status(200)
            .with_body(auth_body(&jwt))
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::new());
        let manager = manager(Arc::clone(&store), &server.url());

        let token = manager.access_token().await.unwrap();
        assert_eq!(token, jwt);

        // Persisted under the cache key in the wire format
        let raw = store
            .get_item(r#"["alice","us-east-1_AbCdEfGhI","client1"]"#)
            .await
            .unwrap()
            .unwrap();
        let cached: Credentials = serde_json::from_str(&raw).unwrap();
        assert_eq!(cached.access_token, jwt);
        assert_eq!(cached.refresh_token, "opaque-rt");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_warm_cache_skips_idp() {
        let jwt = make_jwt(now() + 3600);
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .expect(1)
            .with_status(200)
            .with_body(auth_body(&jwt))
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::new());
        let manager = manager(Arc::clone(&store), &server.url());

        let first = manager.access_token().await.unwrap();
        let second = manager.access_token().await.unwrap();
        assert_eq!(first, second);

        // Only the cold call reached the IdP
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_expired_cache_reauthenticates() {
        let fresh = make_jwt(now() + 3600);
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .expect(1)
            .with_status(200)
            .with_body(auth_body(&fresh))
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::new());
        let stale = Credentials {
            access_token: make_jwt(now() - 10),
            refresh_token: "still-usable-rt".into(),
        };
        store
            .set_item(
                r#"["alice","us-east-1_AbCdEfGhI","client1"]"#,
                &serde_json::to_string(&stale).unwrap(),
            )
            .await
            .unwrap();

        let manager = manager(Arc::clone(&store), &server.url());
        let token = manager.access_token().await.unwrap();
        assert_eq!(token, fresh);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_auth_failure_propagates_and_keeps_cache() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(400)
            .with_body(r#"{"__type":"NotAuthorizedException","message":"Incorrect username or password."}"#)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::new());
        store
            .set_item(r#"["alice","us-east-1_AbCdEfGhI","client1"]"#, "not json {")
            .await
            .unwrap();

        let manager = manager(Arc::clone(&store), &server.url());
        let err = manager.access_token().await.unwrap_err();
        assert!(matches!(err, Error::Cognito { .. }));

        // The unreadable entry is left in place; the next call retries
        assert_eq!(
            store
                .get_item(r#"["alice","us-east-1_AbCdEfGhI","client1"]"#)
                .await
                .unwrap()
                .unwrap(),
            "not json {"
        );
    }

    #[tokio::test]
    async fn test_builder_rejects_missing_arguments() {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());

        let err = CognitoAuthManager::builder()
            .username("alice")
            .user_pool_id("us-east-1_AbCdEfGhI")
            .client_id("client1")
            .store(Arc::clone(&store))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument(name) if name == "Password"));

        let err = CognitoAuthManager::builder()
            .username("")
            .password("pw")
            .user_pool_id("us-east-1_AbCdEfGhI")
            .client_id("client1")
            .store(store)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument(name) if name == "Username"));
    }

    #[tokio::test]
    async fn test_builder_derives_endpoint_from_pool_id() {
        let manager = CognitoAuthManager::builder()
            .username("alice")
            .password("pw")
            .user_pool_id("eu-west-2_Zyxwvut")
            .client_id("client1")
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap();
        assert_eq!(
            manager.endpoint(),
            "https://cognito-idp.eu-west-2.amazonaws.com/"
        );
    }

    #[tokio::test]
    async fn test_builder_rejects_malformed_pool_id() {
        let err = CognitoAuthManager::builder()
            .username("alice")
            .password("pw")
            .user_pool_id("not-a-pool-id")
            .client_id("client1")
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_debug_redacts_password() {
        let manager = CognitoAuthManager::builder()
            .username("alice")
            .password("hunter2")
            .user_pool_id("us-east-1_AbCdEfGhI")
            .client_id("client1")
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap();
        let rendered = format!("{:?}", manager);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("alice"));
    }
}
