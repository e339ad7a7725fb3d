//! Capability traits consumed by the session manager and the cart.
//!
//! The session store and cart submission are written against these traits
//! rather than [`ApiClient`](crate::ApiClient) directly so tests can drive
//! them with counting fakes.

use async_trait::async_trait;
use penabar_core::{OrderConfirmation, OrderItem, User};
use serde::Deserialize;

use crate::error::ApiError;

/// Response of `POST /login` and `POST /register`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Fresh bearer token for subsequent requests.
    pub access_token: String,
    /// Profile of the authenticated member.
    pub user: User,
}

/// Authentication surface of the backend, as the session manager needs it.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Installs (or clears) the bearer token attached to outgoing requests.
    async fn set_token(&self, token: Option<String>);

    /// Liveness/profile check against the protected `/me` endpoint.
    ///
    /// A 401 here means the installed token is no longer honored.
    async fn me(&self) -> Result<User, ApiError>;

    /// Exchanges credentials for a token and profile.
    async fn login(&self, name: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Creates an account; behaves like [`AuthApi::login`] on success.
    async fn register(&self, name: &str, password: &str) -> Result<LoginResponse, ApiError>;
}

/// Order submission surface of the backend, as the cart needs it.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Sends one order with all its lines as a single call.
    async fn submit_order(&self, items: &[OrderItem]) -> Result<OrderConfirmation, ApiError>;
}
