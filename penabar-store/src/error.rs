//! Store error types.

use penabar_client::ApiError;
use thiserror::Error;

/// Errors from the credential storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform keychain failed.
    #[error("Keychain error: {0}")]
    Keychain(String),

    /// IO error from the file backend.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur in the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Operation requires a logged-in session.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The backend stopped honoring the session's credential; the session
    /// has already been evicted when this is returned.
    #[error("Session expired")]
    SessionExpired,

    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Credential storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}
