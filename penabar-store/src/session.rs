//! The session store: single source of truth for "who is logged in".
//!
//! One `SessionStore` exists per running app. All mutations go through its
//! methods, which keeps the invariant that token and profile are always
//! stored together or not at all. Observers (screens) subscribe through a
//! watch channel and re-read on change.

use penabar_client::{ApiError, AuthApi};
use penabar_core::User;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::storage::{keys, CredentialStore};

// ============================================================================
// Session
// ============================================================================

/// The authenticated state: credential plus cached profile.
///
/// Both fields exist together by construction; a logged-out app simply has
/// no `Session`.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    /// Cached profile of the logged-in member.
    pub user: User,
}

/// Internal state for the session store.
struct SessionInner {
    session: Option<Session>,
    /// True only during the initial restore attempt after launch.
    loading: bool,
}

// ============================================================================
// Session Store
// ============================================================================

/// Owns the authentication lifecycle: restore on launch, login, register,
/// profile refresh, logout, and automatic eviction of zombie credentials.
///
/// Observable via a watch channel for UI updates.
#[derive(Clone)]
pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn CredentialStore>,
    inner: Arc<RwLock<SessionInner>>,
    notify: watch::Sender<u64>,
    version: Arc<RwLock<u64>>,
}

impl SessionStore {
    /// Creates a store over the given API and storage backend.
    ///
    /// The store starts empty with `loading = true`; call
    /// [`SessionStore::bootstrap`] once before rendering anything gated on
    /// the session.
    pub fn new(api: Arc<dyn AuthApi>, storage: Arc<dyn CredentialStore>) -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            api,
            storage,
            inner: Arc::new(RwLock::new(SessionInner {
                session: None,
                loading: true,
            })),
            notify,
            version: Arc::new(RwLock::new(0)),
        }
    }

    // ========================================================================
    // Bootstrap
    // ========================================================================

    /// Restores the session from storage, once, at process start.
    ///
    /// With no stored credential this completes without any network call.
    /// With a stored credential, the token is installed and checked against
    /// `/me`: on success the fresh profile is adopted and re-persisted; on
    /// any failure the credential is treated as a zombie and evicted.
    /// `loading` becomes false exactly once, at the end, on every path.
    pub async fn bootstrap(&self) {
        let token = self.read_stored(keys::USER_TOKEN).await;
        let stored_profile = self.read_stored(keys::USER_INFO).await;

        if let (Some(token), Some(_)) = (token, stored_profile) {
            self.api.set_token(Some(token.clone())).await;

            match self.api.me().await {
                Ok(user) => {
                    info!(user = %user.name, "Session restored");
                    self.persist_profile(&user).await;
                    let mut inner = self.inner.write().await;
                    inner.session = Some(Session { token, user });
                }
                Err(e) => {
                    // Zombie token: the server no longer honors it, so it
                    // must not be allowed back in on the next launch.
                    warn!(error = %e, "Stored credential rejected, evicting");
                    self.api.set_token(None).await;
                    self.erase_stored().await;
                }
            }
        } else {
            debug!("No stored session");
        }

        {
            let mut inner = self.inner.write().await;
            inner.loading = false;
        }
        self.notify_change().await;
    }

    // ========================================================================
    // Login / Register
    // ========================================================================

    /// Exchanges credentials for a fresh session and persists it.
    ///
    /// On failure the error propagates and the previous session state is
    /// left untouched.
    pub async fn login(&self, name: &str, password: &str) -> Result<User, StoreError> {
        let response = self.api.login(name, password).await?;
        self.install(response.access_token, response.user.clone())
            .await?;
        info!(user = %response.user.name, "Logged in");
        Ok(response.user)
    }

    /// Creates an account and stores the resulting session, exactly like a
    /// successful login. Duplicate-name rejections propagate.
    pub async fn register(&self, name: &str, password: &str) -> Result<User, StoreError> {
        let response = self.api.register(name, password).await?;
        self.install(response.access_token, response.user.clone())
            .await?;
        info!(user = %response.user.name, "Registered");
        Ok(response.user)
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Re-fetches the profile (balance) from the server, leaving the token
    /// untouched.
    ///
    /// A credential rejection evicts the whole session as a side effect and
    /// surfaces as [`StoreError::SessionExpired`]; any other failure simply
    /// propagates and the cached profile stays stale.
    pub async fn refresh_profile(&self) -> Result<User, StoreError> {
        if !self.is_logged_in().await {
            return Err(StoreError::NotLoggedIn);
        }

        match self.api.me().await {
            Ok(user) => {
                debug!(balance = %user.balance, "Profile refreshed");
                self.persist_profile(&user).await;
                {
                    let mut inner = self.inner.write().await;
                    if let Some(session) = inner.session.as_mut() {
                        session.user = user.clone();
                    }
                }
                self.notify_change().await;
                Ok(user)
            }
            Err(e) if e.is_unauthorized() => {
                warn!("Credential expired during refresh, logging out");
                self.logout().await;
                Err(StoreError::SessionExpired)
            }
            Err(e) => Err(e.into()),
        }
    }

    // ========================================================================
    // Logout
    // ========================================================================

    /// Clears the session, the outgoing authorization, and both storage
    /// keys. Idempotent.
    pub async fn logout(&self) {
        {
            let mut inner = self.inner.write().await;
            inner.session = None;
        }
        self.api.set_token(None).await;
        self.erase_stored().await;
        self.notify_change().await;
        info!("Logged out");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The cached profile, if logged in.
    pub async fn current_user(&self) -> Option<User> {
        self.inner
            .read()
            .await
            .session
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// The current bearer token, if logged in.
    pub async fn token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .session
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Returns true while the initial restore is still running.
    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    /// Returns true if a session is established.
    pub async fn is_logged_in(&self) -> bool {
        self.inner.read().await.session.is_some()
    }

    /// Subscribes to session changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Installs a fresh token + profile in memory, on the API client, and
    /// in storage.
    async fn install(&self, token: String, user: User) -> Result<(), StoreError> {
        self.api.set_token(Some(token.clone())).await;
        {
            let mut inner = self.inner.write().await;
            inner.session = Some(Session {
                token: token.clone(),
                user: user.clone(),
            });
        }
        self.notify_change().await;

        self.storage.set(keys::USER_TOKEN, &token).await?;
        let profile = serde_json::to_string(&user)?;
        self.storage.set(keys::USER_INFO, &profile).await?;
        Ok(())
    }

    /// Best-effort write of the profile key; a failure only means the
    /// cached copy goes stale.
    async fn persist_profile(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(profile) => {
                if let Err(e) = self.storage.set(keys::USER_INFO, &profile).await {
                    warn!(error = %e, "Failed to persist refreshed profile");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize profile"),
        }
    }

    /// Reads a stored key, treating backend failures as "absent".
    async fn read_stored(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read stored credential");
                None
            }
        }
    }

    /// Best-effort deletion of both storage keys.
    async fn erase_stored(&self) {
        for key in [keys::USER_TOKEN, keys::USER_INFO] {
            if let Err(e) = self.storage.delete(key).await {
                warn!(key = %key, error = %e, "Failed to delete stored credential");
            }
        }
    }

    /// Notifies subscribers of a change.
    async fn notify_change(&self) {
        let mut version = self.version.write().await;
        *version += 1;
        let _ = self.notify.send(*version);
    }
}

// ============================================================================
// Tests
// ============================================================================
