//! Cart submission.
//!
//! The cart lives in `penabar-core` and knows nothing about the network;
//! this module owns the one transition that does: turning the accumulated
//! lines into a `POST /pedidos` and clearing the cart only once the
//! backend has accepted it.

use penabar_client::{ApiError, OrderApi};
use penabar_core::{Cart, OrderConfirmation};
use tracing::{debug, info};

/// Submits the cart as a single order.
///
/// An empty cart short-circuits to `Ok(None)` without touching the network.
/// On success the cart is cleared and the backend's confirmation returned;
/// on failure the cart is left exactly as it was so the caller can retry.
pub async fn submit_cart(
    cart: &mut Cart,
    api: &dyn OrderApi,
) -> Result<Option<OrderConfirmation>, ApiError> {
    if cart.is_empty() {
        debug!("Cart is empty, nothing to submit");
        return Ok(None);
    }

    let items = cart.to_items();
    let confirmation = api.submit_order(&items).await?;

    info!(lines = items.len(), "Order accepted");
    cart.clear();
    Ok(Some(confirmation))
}
