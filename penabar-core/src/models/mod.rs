//! Domain models for Peñabar.
//!
//! The wire format follows the backend's field names (Spanish: `nombre`,
//! `precio`, `saldo`, ...); Rust field names are English and mapped with
//! `#[serde(rename)]`.
//!
//! ## Submodules
//!
//! - [`user`] - Member profiles and roles
//! - [`drink`] - Catalog entries
//! - [`order`] - Submitted orders and order payloads
//! - [`stats`] - The consumption dashboard payload

mod drink;
mod order;
mod stats;
mod user;

// Re-export everything at the models level
pub use drink::{Drink, DrinkPayload};
pub use order::{Order, OrderConfirmation, OrderCustomer, OrderItem, OrderLine, OrderLineDrink};
pub use stats::{CustomerTab, DrinkRanking, Statistics};
pub use user::{Role, User};

#[cfg(test)]
mod serde_tests;
