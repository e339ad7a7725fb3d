//! Order types.
//!
//! [`OrderItem`] is what the client sends to `POST /pedidos`; [`Order`] is
//! what staff get back from `GET /admin/pedidos` for the pending queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Outgoing order payload
// ============================================================================

/// One line of an order submission: a drink id and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Drink identifier.
    #[serde(rename = "bebida_id")]
    pub drink_id: i64,
    /// Requested quantity, always >= 1.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Whatever the backend returns from a successful order creation.
///
/// The shape is not pinned down (the original client discards the body), so
/// both fields are lenient.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderConfirmation {
    /// Created order id, when the backend reports one.
    #[serde(default)]
    pub id: Option<i64>,
    /// Human-readable confirmation, when the backend reports one.
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Pending orders (staff queue)
// ============================================================================

/// A pending order as listed by `GET /admin/pedidos`.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Backend identifier.
    pub id: i64,
    /// Who placed the order.
    #[serde(rename = "user")]
    pub customer: OrderCustomer,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// The ordered lines.
    #[serde(rename = "detalles")]
    pub lines: Vec<OrderLine>,
}

/// The customer a pending order belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCustomer {
    /// Display name.
    pub name: String,
}

/// One line of a pending order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLine {
    /// Quantity ordered.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// The drink, reduced to what the queue needs.
    #[serde(rename = "bebida")]
    pub drink: OrderLineDrink,
}

/// Drink reference embedded in a pending order line.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineDrink {
    /// Drink identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
}
