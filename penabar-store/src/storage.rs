//! Credential storage backends.
//!
//! The session manager persists exactly two keys: the bearer token and the
//! serialized profile. [`CredentialStore`] abstracts where those live:
//!
//! - [`KeyringStorage`] - the system credential store (macOS Keychain,
//!   Windows Credential Manager, Linux Secret Service)
//! - [`FileStorage`] - a 0600-permission JSON file under the config dir,
//!   for platforms without a usable keychain
//! - [`MemoryStorage`] - ephemeral, for tests and throwaway sessions
//!
//! The backend is picked once at startup; everything above the trait is
//! unaware of which one is active.

use async_trait::async_trait;
use keyring::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::StorageError;

/// Service name under which keyring entries are filed.
const KEYRING_SERVICE: &str = "penabar";

/// The keys the session manager persists.
pub mod keys {
    /// Bearer token.
    pub const USER_TOKEN: &str = "user_token";
    /// JSON-serialized profile.
    pub const USER_INFO: &str = "user_info";
}

// ============================================================================
// Credential Store Trait
// ============================================================================

/// Key/value persistence for session credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads a value. `Ok(None)` means the key is not stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes a value. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

// ============================================================================
// Keyring Backend
// ============================================================================

/// System keychain backend via the `keyring` crate.
#[derive(Debug, Clone, Default)]
pub struct KeyringStorage;

impl KeyringStorage {
    /// Creates the keyring backend.
    pub fn new() -> Self {
        Self
    }

    fn entry(key: &str) -> Result<Entry, StorageError> {
        Entry::new(KEYRING_SERVICE, key).map_err(|e| StorageError::Keychain(e.to_string()))
    }
}

#[async_trait]
impl CredentialStore for KeyringStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entry = Self::entry(key)?;
        match entry.get_password() {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            Ok(_) | Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read credential");
                Err(StorageError::Keychain(e.to_string()))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let entry = Self::entry(key)?;
        entry
            .set_password(value)
            .map_err(|e| StorageError::Keychain(e.to_string()))?;
        debug!(key = %key, "Credential stored in keychain");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let entry = Self::entry(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {
                debug!(key = %key, "Credential deleted from keychain");
                Ok(())
            }
            Err(e) => Err(StorageError::Keychain(e.to_string())),
        }
    }
}

// ============================================================================
// File Backend
// ============================================================================

/// File-backed storage: one JSON object per file, written atomically with
/// owner-only permissions.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a file backend at `path`. The file is created lazily on the
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this backend writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write atomically: temp file, then rename into place.
        let json = serde_json::to_string_pretty(entries)?;
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        set_restrictive_permissions(&self.path).await?;
        debug!(path = %self.path.display(), "Credential file saved");
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.save(&entries).await?;
        }
        Ok(())
    }
}

/// Sets 0600 on Unix; credentials are owner-only.
#[cfg(unix)]
async fn set_restrictive_permissions(path: &Path) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = tokio::fs::metadata(path).await?;
    let mut perms = metadata.permissions();
    perms.set_mode(0o600);
    tokio::fs::set_permissions(path, perms).await?;
    Ok(())
}

/// No-op for non-Unix systems.
#[cfg(not(unix))]
async fn set_restrictive_permissions(_path: &Path) -> Result<(), StorageError> {
    Ok(())
}

// ============================================================================
// Memory Backend
// ============================================================================

/// In-memory backend. Nothing survives the process; used by tests and for
/// explicitly ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| StorageError::Keychain("poisoned lock".to_string()))?
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Keychain("poisoned lock".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Keychain("poisoned lock".to_string()))?
            .remove(key);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();

        assert!(storage.get(keys::USER_TOKEN).await.unwrap().is_none());

        storage.set(keys::USER_TOKEN, "t1").await.unwrap();
        assert_eq!(
            storage.get(keys::USER_TOKEN).await.unwrap().as_deref(),
            Some("t1")
        );

        storage.delete(keys::USER_TOKEN).await.unwrap();
        assert!(storage.get(keys::USER_TOKEN).await.unwrap().is_none());

        // Deleting again is fine.
        storage.delete(keys::USER_TOKEN).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_backend_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let storage = FileStorage::new(&path);
        storage.set(keys::USER_TOKEN, "t1").await.unwrap();
        storage.set(keys::USER_INFO, "{}").await.unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get(keys::USER_TOKEN).await.unwrap().as_deref(),
            Some("t1")
        );

        reopened.delete(keys::USER_TOKEN).await.unwrap();
        assert!(reopened.get(keys::USER_TOKEN).await.unwrap().is_none());
        assert!(reopened.get(keys::USER_INFO).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_file_backend_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("never-written.json"));
        assert!(storage.get(keys::USER_TOKEN).await.unwrap().is_none());
        storage.delete(keys::USER_TOKEN).await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_backend_sets_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let storage = FileStorage::new(&path);
        storage.set(keys::USER_TOKEN, "t1").await.unwrap();

        let mode = tokio::fs::metadata(&path)
            .await
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600);
    }
}
