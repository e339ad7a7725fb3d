//! Catalog entry types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Drink
// ============================================================================

/// A drink on the catalog (wire name: `bebida`).
///
/// `/bebidas` only returns active drinks; `/admin/bebidas` returns the full
/// catalog including deactivated entries. Some backend versions omit
/// `is_active` on the public listing, so it defaults to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price. Non-negative; sent as a decimal string by the backend.
    #[serde(rename = "precio")]
    pub price: Decimal,
    /// Grouping label for the menu (e.g. "Cervezas").
    #[serde(rename = "categoria")]
    pub category: String,
    /// Whether the drink is currently orderable.
    #[serde(rename = "is_active", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

// ============================================================================
// Drink Payload (create/update)
// ============================================================================

/// Partial drink payload for the admin create/update endpoints.
///
/// `None` fields are omitted from the request body, which is how the update
/// endpoint distinguishes "leave unchanged" from an explicit value (the
/// activate/deactivate toggle sends `is_active` alone).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrinkPayload {
    /// New display name.
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New unit price.
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// New category label.
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New active flag.
    #[serde(rename = "is_active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl DrinkPayload {
    /// Payload for creating a new drink. New drinks start active.
    pub fn new(name: impl Into<String>, price: Decimal, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            category: Some(category.into()),
            active: None,
        }
    }

    /// Payload that only toggles the active flag.
    pub fn set_active(active: bool) -> Self {
        Self {
            active: Some(active),
            ..Self::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
