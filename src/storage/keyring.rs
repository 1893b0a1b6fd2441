//! System keyring-based store (feature-gated).

use async_trait::async_trait;
use tracing::debug;

use super::Store;
use crate::error::{Error, Result};

const SERVICE_NAME: &str = "cognito-tag";

/// Store using the system keyring (Secret Service / Keychain / Credential Manager).
///
/// Each cache key becomes a keyring entry under the `cognito-tag` service.
pub struct KeyringStore;

impl KeyringStore {
    /// Create a new keyring store.
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for KeyringStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let entry =
            keyring::Entry::new(SERVICE_NAME, key).map_err(|e| Error::Keyring(e.to_string()))?;
        match entry.get_password() {
            Ok(value) => {
                debug!("Cache entry loaded from keyring");
                Ok(Some(value))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(Error::Keyring(e.to_string())),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let entry =
            keyring::Entry::new(SERVICE_NAME, key).map_err(|e| Error::Keyring(e.to_string()))?;
        entry
            .set_password(value)
            .map_err(|e| Error::Keyring(e.to_string()))?;
        debug!("Cache entry saved to keyring");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let entry =
            keyring::Entry::new(SERVICE_NAME, key).map_err(|e| Error::Keyring(e.to_string()))?;
        match entry.delete_credential() {
            Ok(()) => {
                debug!("Cache entry removed from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(Error::Keyring(e.to_string())),
        }
    }

    fn name(&self) -> &str {
        "keyring"
    }
}
