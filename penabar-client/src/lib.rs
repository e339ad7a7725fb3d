// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Peñabar Client
//!
//! HTTP client for the peña backend.
//!
//! This crate provides:
//!
//! - [`ApiClient`]: a `reqwest`-backed client with a fixed base address,
//!   JSON content negotiation, an explicit request timeout, and a bearer
//!   token attached to every request once installed
//! - [`AuthApi`] / [`OrderApi`]: the capability traits the session manager
//!   and the cart are written against
//! - [`ApiError`]: the error taxonomy (credential rejection, server
//!   validation messages, transport failures)
//!
//! ## Usage
//!
//! ```ignore
//! use penabar_client::{ApiClient, AuthApi, DEFAULT_BASE_URL};
//!
//! let api = ApiClient::new(DEFAULT_BASE_URL)?;
//! let session = api.login("maite", "secret").await?;
//! api.set_token(Some(session.access_token.clone())).await;
//! let drinks = api.list_drinks().await?;
//! ```

pub mod api;
pub mod client;
pub mod error;

pub use api::{AuthApi, LoginResponse, OrderApi};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
