// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Peñabar Core
//!
//! Core types and models for the Peñabar client.
//!
//! This crate provides the foundational abstractions used across all other
//! Peñabar crates, including:
//!
//! - Domain models (users, drinks, orders, statistics)
//! - The in-memory [`Cart`] accumulator for an in-progress order
//!
//! ## Key Types
//!
//! - [`User`] / [`Role`] - A member's profile and their role
//! - [`Drink`] - A catalog entry (wire name: `bebida`)
//! - [`Cart`] / [`CartLine`] - The pending order being built locally
//! - [`Order`] - A submitted order as staff see it in the pending queue
//! - [`Statistics`] - The consumption dashboard payload

pub mod cart;
pub mod models;

// Re-export all model types
pub use models::{
    // User types
    Role,
    User,
    // Catalog types
    Drink,
    DrinkPayload,
    // Order types
    Order,
    OrderConfirmation,
    OrderCustomer,
    OrderItem,
    OrderLine,
    OrderLineDrink,
    // Statistics types
    CustomerTab,
    DrinkRanking,
    Statistics,
};

// Re-export the cart
pub use cart::{Cart, CartLine};
