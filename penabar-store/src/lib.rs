// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Peñabar Store
//!
//! Session management and local state for the peña client.
//!
//! This crate provides:
//!
//! - **SessionStore**: the authentication lifecycle, observable via a watch
//!   channel, on top of pluggable credential storage
//! - **CredentialStore** backends: platform keychain, owner-only file, memory
//! - **submit_cart**: the cart-to-order transition
//! - **Config**: base URL, timeout and storage backend selection
//!
//! ## Usage
//!
//! ```ignore
//! use penabar_client::ApiClient;
//! use penabar_store::{KeyringStorage, SessionStore};
//! use std::sync::Arc;
//!
//! let api = Arc::new(ApiClient::new(penabar_client::DEFAULT_BASE_URL)?);
//! let store = SessionStore::new(api, Arc::new(KeyringStorage::new()));
//!
//! // Restore any persisted session before showing anything gated on auth.
//! store.bootstrap().await;
//!
//! if let Some(user) = store.current_user().await {
//!     println!("Welcome back, {}", user.name);
//! }
//! ```

pub mod config;
pub mod error;
pub mod ordering;
pub mod session;
pub mod storage;

pub use config::{Config, StorageBackend};
pub use error::{StorageError, StoreError};
pub use ordering::submit_cart;
pub use session::{Session, SessionStore};
pub use storage::{keys, CredentialStore, FileStorage, KeyringStorage, MemoryStorage};
