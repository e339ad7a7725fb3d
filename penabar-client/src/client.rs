//! The HTTP client for the peña backend.

use async_trait::async_trait;
use penabar_core::{Drink, DrinkPayload, Order, OrderConfirmation, OrderItem, Role, Statistics, User};
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

use crate::api::{AuthApi, LoginResponse, OrderApi};
use crate::error::ApiError;

/// Production backend address.
pub const DEFAULT_BASE_URL: &str = "https://pe-aapp-back.onrender.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// Api Client
// ============================================================================

/// HTTP client with a fixed base address and JSON content negotiation.
///
/// The bearer token lives on the client; once installed (by the session
/// manager) it is attached to every outgoing request, mirroring a default
/// authorization header.
#[derive(Debug)]
pub struct ApiClient {
    inner: Client,
    base_url: Url,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("penabar/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner,
            base_url,
            token: RwLock::new(None),
        })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns true if a bearer token is currently installed.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        debug!(method = %method, url = %url, "Building request");

        let mut builder = self.inner.request(method, url);
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Sends the request and maps non-success statuses to [`ApiError`].
    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // 401 gets special treatment everywhere; other statuses keep the
        // server's message when the body carries one.
        if status == StatusCode::UNAUTHORIZED {
            warn!(status = %status, "Credential rejected");
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).await?;
        let response = Self::send(builder).await?;
        Ok(response.json().await?)
    }

    async fn send_ignoring_body(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let builder = self.request(method, path).await?;
        Self::send(builder).await?;
        Ok(())
    }

    // ========================================================================
    // Menu
    // ========================================================================

    /// Lists the active drinks (`GET /bebidas`).
    ///
    /// Canonical wire shape: a flat array. Category grouping is a display
    /// concern.
    pub async fn list_drinks(&self) -> Result<Vec<Drink>, ApiError> {
        self.get_json("bebidas").await
    }

    // ========================================================================
    // Staff: pending orders
    // ========================================================================

    /// Lists pending orders for the staff queue (`GET /admin/pedidos`).
    pub async fn pending_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("admin/pedidos").await
    }

    /// Marks an order as served (`PUT /pedidos/{id}/servir`).
    pub async fn serve_order(&self, order_id: i64) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::PUT, &format!("pedidos/{order_id}/servir"))
            .await
    }

    /// Cancels a pending order (`DELETE /admin/pedidos/{id}`).
    pub async fn cancel_order(&self, order_id: i64) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::DELETE, &format!("admin/pedidos/{order_id}"))
            .await
    }

    // ========================================================================
    // Admin: drinks catalog
    // ========================================================================

    /// Lists the full catalog, inactive drinks included (`GET /admin/bebidas`).
    pub async fn all_drinks(&self) -> Result<Vec<Drink>, ApiError> {
        self.get_json("admin/bebidas").await
    }

    /// Creates a drink (`POST /admin/bebidas/create`).
    pub async fn create_drink(&self, payload: &DrinkPayload) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "admin/bebidas/create").await?;
        Self::send(builder.json(payload)).await?;
        Ok(())
    }

    /// Partially updates a drink (`PUT /admin/bebidas/{id}/update`).
    ///
    /// Used both for edits and for the activate/deactivate toggle, which
    /// sends `is_active` alone.
    pub async fn update_drink(&self, drink_id: i64, payload: &DrinkPayload) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("admin/bebidas/{drink_id}/update"))
            .await?;
        Self::send(builder.json(payload)).await?;
        Ok(())
    }

    // ========================================================================
    // Admin: users
    // ========================================================================

    /// Lists all members (`GET /admin/usuarios`).
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("admin/usuarios").await
    }

    /// Changes a member's role (`PUT /admin/usuarios/{id}`).
    pub async fn set_user_role(&self, user_id: i64, role: Role) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("admin/usuarios/{user_id}"))
            .await?;
        Self::send(builder.json(&json!({ "role": role }))).await?;
        Ok(())
    }

    /// Deletes a member (`DELETE /admin/usuarios/{id}`).
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::DELETE, &format!("admin/usuarios/{user_id}"))
            .await
    }

    // ========================================================================
    // Admin: statistics
    // ========================================================================

    /// Fetches the consumption dashboard (`GET /admin/estadisticas`).
    pub async fn statistics(&self) -> Result<Statistics, ApiError> {
        self.get_json("admin/estadisticas").await
    }

    /// Wipes all orders and sales history (`DELETE /admin/reset-pedidos`).
    pub async fn reset_orders(&self) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::DELETE, "admin/reset-pedidos")
            .await
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

#[async_trait]
impl AuthApi for ApiClient {
    async fn set_token(&self, token: Option<String>) {
        let installed = token.is_some();
        *self.token.write().await = token;
        debug!(installed, "Bearer token updated");
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.get_json("me").await
    }

    async fn login(&self, name: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "login").await?;
        let response = Self::send(builder.json(&json!({
            "name": name,
            "password": password,
        })))
        .await?;
        Ok(response.json().await?)
    }

    async fn register(&self, name: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "register").await?;
        let response = Self::send(builder.json(&json!({
            "name": name,
            "password": password,
        })))
        .await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl OrderApi for ApiClient {
    async fn submit_order(&self, items: &[OrderItem]) -> Result<OrderConfirmation, ApiError> {
        let builder = self.request(Method::POST, "pedidos").await?;
        let response = Self::send(builder.json(&json!({ "items": items }))).await?;
        Ok(response.json().await?)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parses the base URL and guarantees a trailing slash so that joining
/// relative paths keeps any path prefix (e.g. `https://host/api/`).
fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = normalize_base_url("https://example.test/api").unwrap();
        assert_eq!(url.as_str(), "https://example.test/api/");

        // Joining must keep the path prefix.
        assert_eq!(
            url.join("admin/pedidos").unwrap().as_str(),
            "https://example.test/api/admin/pedidos"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_token_installation_is_observable() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
        assert!(!client.has_token().await);

        client.set_token(Some("t1".to_string())).await;
        assert!(client.has_token().await);

        client.set_token(None).await;
        assert!(!client.has_token().await);
    }
}
