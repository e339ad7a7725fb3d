//! Consumption statistics types (`GET /admin/estadisticas`).

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The statistics dashboard payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Statistics {
    /// Best-selling drinks, ordered by units sold.
    #[serde(rename = "resumen", default)]
    pub ranking: Vec<DrinkRanking>,
    /// Per-member consumption and amount owed.
    #[serde(rename = "historial", default)]
    pub tabs: Vec<CustomerTab>,
}

impl Statistics {
    /// Returns true if nothing has been served yet.
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty() && self.tabs.is_empty()
    }
}

/// One row of the best-sellers ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct DrinkRanking {
    /// Drink name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Units served in total.
    #[serde(rename = "total_vendido")]
    pub units_sold: u64,
}

/// One member's tab: what they consumed and what it cost.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerTab {
    /// Member identifier.
    pub id: i64,
    /// Member name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Total amount spent.
    #[serde(rename = "total_gastado")]
    pub total_spent: Decimal,
    /// Drink name -> units consumed. BTreeMap keeps the listing stable.
    #[serde(rename = "bebidas", default)]
    pub drinks: BTreeMap<String, u32>,
}
