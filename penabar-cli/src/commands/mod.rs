//! CLI command implementations.

pub mod auth;
pub mod catalog;
pub mod menu;
pub mod order;
pub mod staff;
pub mod stats;
pub mod users;
