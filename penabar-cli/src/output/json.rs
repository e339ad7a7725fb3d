//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use penabar_core::{Cart, Drink, Order, Statistics, User};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for the profile commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOutput {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub balance: Decimal,
}

impl From<&User> for ProfileOutput {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role.to_string(),
            balance: user.balance,
        }
    }
}

/// JSON output for one menu/catalog entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkOutput {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub active: bool,
}

impl From<&Drink> for DrinkOutput {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id,
            name: drink.name.clone(),
            price: drink.price,
            category: drink.category.clone(),
            active: drink.active,
        }
    }
}

/// JSON output for the pre-submit cart summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartOutput {
    pub lines: Vec<CartLineOutput>,
    pub total: Decimal,
}

/// One cart line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineOutput {
    pub drink_id: i64,
    pub name: String,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl From<&Cart> for CartOutput {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineOutput {
                    drink_id: line.drink.id,
                    name: line.drink.name.clone(),
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
                .collect(),
            total: cart.total(),
        }
    }
}

/// JSON output for one pending order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOutput {
    pub id: i64,
    pub customer: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLineOutput>,
}

/// One line of a pending order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineOutput {
    pub drink_id: i64,
    pub name: String,
    pub quantity: u32,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer: order.customer.name.clone(),
            created_at: order.created_at,
            lines: order
                .lines
                .iter()
                .map(|line| OrderLineOutput {
                    drink_id: line.drink.id,
                    name: line.drink.name.clone(),
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

/// JSON output for the statistics dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsOutput {
    pub ranking: Vec<RankingOutput>,
    pub tabs: Vec<TabOutput>,
}

/// One ranking entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingOutput {
    pub name: String,
    pub units_sold: u64,
}

/// One member tab.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabOutput {
    pub id: i64,
    pub name: String,
    pub total_spent: Decimal,
    pub drinks: BTreeMap<String, u32>,
}

impl From<&Statistics> for StatisticsOutput {
    fn from(stats: &Statistics) -> Self {
        Self {
            ranking: stats
                .ranking
                .iter()
                .map(|entry| RankingOutput {
                    name: entry.name.clone(),
                    units_sold: entry.units_sold,
                })
                .collect(),
            tabs: stats
                .tabs
                .iter()
                .map(|tab| TabOutput {
                    id: tab.id,
                    name: tab.name.clone(),
                    total_spent: tab.total_spent,
                    drinks: tab.drinks.clone(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter with optional pretty-printing.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes any output value.
    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(output)
    }
}
