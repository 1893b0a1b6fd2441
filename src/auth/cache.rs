//! Credential cache restore/persist against a host store.

use tracing::debug;

use crate::error::Result;
use crate::models::auth::{Credentials, PoolIdentity};
use crate::storage::Store;
use crate::token;

/// Restore cached credentials for an identity.
///
/// Returns `None` when the cache entry is missing, unreadable, or holds
/// an expired access token. An expired access token forces full
/// re-authentication even when the refresh token may still be usable.
/// Store read failures propagate.
// TODO: redeem the refresh token via REFRESH_TOKEN_AUTH instead of
// falling back to a full password login.
pub async fn restore(store: &dyn Store, identity: &PoolIdentity) -> Result<Option<Credentials>> {
    let key = identity.cache_key();
    let Some(raw) = store.get_item(&key).await? else {
        debug!("No cached credentials");
        return Ok(None);
    };

    let credentials: Credentials = match serde_json::from_str(&raw) {
        Ok(credentials) => credentials,
        Err(e) => {
            debug!(error = %e, "Discarding unreadable cache entry");
            return Ok(None);
        }
    };

    if token::is_expired(&credentials.access_token) {
        debug!("Cached access token expired");
        return Ok(None);
    }

    Ok(Some(credentials))
}

/// Persist credentials under the identity's cache key, overwriting any
/// existing entry. Store write failures propagate.
pub async fn persist(
    store: &dyn Store,
    identity: &PoolIdentity,
    credentials: &Credentials,
) -> Result<()> {
    let value = serde_json::to_string(credentials)?;
    store.set_item(&identity.cache_key(), &value).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::token::tests::make_jwt;

    fn identity() -> PoolIdentity {
        PoolIdentity::new("alice", "us-east-1_AbCdEfGhI", "client1")
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    #[tokio::test]
    async fn test_restore_valid_pair() {
        let store = MemoryStore::new();
        let creds = Credentials {
            access_token: make_jwt(now() + 3600),
            refresh_token: "opaque-refresh".into(),
        };
        persist(&store, &identity(), &creds).await.unwrap();

        let restored = restore(&store, &identity()).await.unwrap();
        assert_eq!(restored, Some(creds));
    }

    #[tokio::test]
    async fn test_restore_expired_access_token() {
        let store = MemoryStore::new();
        // Refresh token still "valid" as a JWT - must not matter
        let creds = Credentials {
            access_token: make_jwt(now() - 10),
            refresh_token: make_jwt(now() + 86_400),
        };
        persist(&store, &identity(), &creds).await.unwrap();

        assert!(restore(&store, &identity()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_missing_entry() {
        let store = MemoryStore::new();
        assert!(restore(&store, &identity()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_malformed_entry() {
        let store = MemoryStore::new();
        store
            .set_item(&identity().cache_key(), "not json {")
            .await
            .unwrap();
        assert!(restore(&store, &identity()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_wrong_shape_entry() {
        let store = MemoryStore::new();
        store
            .set_item(&identity().cache_key(), r#"{"something":"else"}"#)
            .await
            .unwrap();
        assert!(restore(&store, &identity()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_persist_writes_wire_format_under_cache_key() {
        let store = MemoryStore::new();
        let creds = Credentials {
            access_token: "at".into(),
            refresh_token: "rt".into(),
        };
        persist(&store, &identity(), &creds).await.unwrap();

        let raw = store
            .get_item(r#"["alice","us-east-1_AbCdEfGhI","client1"]"#)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(raw, r#"{"accessToken":"at","refreshToken":"rt"}"#);
    }

    #[tokio::test]
    async fn test_persist_overwrites() {
        let store = MemoryStore::new();
        let old = Credentials {
            access_token: "old".into(),
            refresh_token: "old-rt".into(),
        };
        let new = Credentials {
            access_token: make_jwt(now() + 3600),
            refresh_token: "new-rt".into(),
        };
        persist(&store, &identity(), &old).await.unwrap();
        persist(&store, &identity(), &new).await.unwrap();

        let restored = restore(&store, &identity()).await.unwrap();
        assert_eq!(restored, Some(new));
    }
}
