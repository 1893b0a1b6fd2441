//! Credential store backends.
//!
//! Provides the [`Store`] trait and implementations:
//! - [`FileStore`] - JSON file with 0600 permissions
//! - [`MemoryStore`] - In-memory (testing)
//! - [`CallbackStore`] - Host-provided callbacks
//! - [`KeyringStore`] - System keyring (feature-gated)

mod callback;
mod file;
mod memory;

#[cfg(feature = "keyring")]
mod keyring;

use async_trait::async_trait;

pub use callback::CallbackStore;
pub use file::FileStore;
pub use memory::MemoryStore;

#[cfg(feature = "keyring")]
pub use keyring::KeyringStore;

use crate::error::Result;

/// Trait for key-value credential stores.
///
/// Mirrors the host's store contract: opaque string keys mapped to
/// opaque string values. Serialization of what goes into a value is the
/// caller's concern.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetch the value stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any existing entry.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry under `key`.
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Check if an entry exists under `key`.
    async fn has_item(&self, key: &str) -> Result<bool> {
        Ok(self.get_item(key).await?.is_some())
    }

    /// Name of this store backend.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Blanket impl for `Arc<T>`.
#[async_trait]
impl<T: Store + ?Sized> Store for std::sync::Arc<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key).await
    }
    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value).await
    }
    async fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key).await
    }
    async fn has_item(&self, key: &str) -> Result<bool> {
        (**self).has_item(key).await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Blanket impl for `Box<T>`.
#[async_trait]
impl<T: Store + ?Sized> Store for Box<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key).await
    }
    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value).await
    }
    async fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key).await
    }
    async fn has_item(&self, key: &str) -> Result<bool> {
        (**self).has_item(key).await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}
