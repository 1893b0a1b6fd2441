//! Callback-based store bridging host-provided persistence.
//!
//! The host hands the tag a store object with `getItem`/`setItem`
//! operations; this adapter exposes those callbacks as a [`Store`].

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::Store;
use crate::error::Result;

type GetFn =
    dyn Fn(String) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send>> + Send + Sync;
type SetFn =
    dyn Fn(String, String) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> + Send + Sync;
type RemoveFn = dyn Fn(String) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> + Send + Sync;

/// Store backed by host-provided async callbacks.
pub struct CallbackStore {
    get_fn: Arc<GetFn>,
    set_fn: Arc<SetFn>,
    remove_fn: Arc<RemoveFn>,
}

impl CallbackStore {
    /// Create from async closures.
    pub fn new<G, S, R>(get: G, set: S, remove: R) -> Self
    where
        G: Fn(String) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send>>
            + Send
            + Sync
            + 'static,
        S: Fn(String, String) -> Pin<Box<dyn Future<Output = Result<()>> + Send>>
            + Send
            + Sync
            + 'static,
        R: Fn(String) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> + Send + Sync + 'static,
    {
        Self {
            get_fn: Arc::new(get),
            set_fn: Arc::new(set),
            remove_fn: Arc::new(remove),
        }
    }
}

#[async_trait]
impl Store for CallbackStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        (self.get_fn)(key.to_string()).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (self.set_fn)(key.to_string(), value.to_string()).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        (self.remove_fn)(key.to_string()).await
    }

    fn name(&self) -> &str {
        "callback"
    }
}
