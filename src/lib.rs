//! # cognito-tag
//!
//! Template tag providing AWS Cognito access tokens via password-based
//! authentication, with credential caching.
//!
//! On every invocation the tag looks up a cached token pair in the
//! host's store, checks the access token's embedded expiry, and only
//! goes back to Cognito when the cache cannot serve the request. Fresh
//! credentials are written back to the store before the access token is
//! returned to the host.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cognito_tag::{tag, MemoryStore, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let context = tag::TagContext::new(Arc::new(MemoryStore::new()));
//!
//!     let token = tag::run(
//!         &context,
//!         tag::TagInput {
//!             username: "alice".into(),
//!             password: "correct horse battery staple".into(),
//!             user_pool_id: "us-east-1_AbCdEfGhI".into(),
//!             client_id: "3n4b5urk1ft4fl3mg5e62d9ado".into(),
//!         },
//!     )
//!     .await?;
//!
//!     println!("Authorization: Bearer {token}");
//!     Ok(())
//! }
//! ```
//!
//! The manager is also usable directly, without the tag surface:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cognito_tag::{CognitoAuthManager, FileStore, Result};
//!
//! # async fn example() -> Result<()> {
//! let manager = CognitoAuthManager::builder()
//!     .username("alice")
//!     .password("correct horse battery staple")
//!     .user_pool_id("us-east-1_AbCdEfGhI")
//!     .client_id("3n4b5urk1ft4fl3mg5e62d9ado")
//!     .store(Arc::new(FileStore::default_path()?))
//!     .build()?;
//!
//! let token = manager.access_token().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `keyring` - Enable the system keyring store backend

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod tag;
pub mod token;

// Re-exports for ergonomic usage
pub use auth::{CognitoAuthManager, CognitoAuthManagerBuilder};
pub use error::{Error, Result};
pub use models::auth::{Credentials, PoolIdentity};
pub use storage::{CallbackStore, FileStore, MemoryStore, Store};

#[cfg(feature = "keyring")]
pub use storage::KeyringStore;
