//! Redline Core - Shared types and domain logic.
//!
//! This crate provides the types and pure logic used across all Redline
//! Ledger components:
//! - `web` - Password-gated purchase viewer (Axum + Askama)
//! - `cli` - Command-line tools for checking sheets and viewing purchases
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no network access,
//! no CSV decoding, no rendering. Sheets arrive already parsed, views leave as
//! plain data. This keeps the whole authenticate/filter/aggregate cycle
//! testable against in-memory fixture sheets.
//!
//! # Modules
//!
//! - [`types`] - The `Sheet` table, price coercion, payment state, identity
//! - [`auth`] - Password resolution against the users sheet
//! - [`ledger`] - Purchase filtering and summary statistics

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod ledger;
pub mod types;

pub use auth::authenticate;
pub use ledger::{PurchaseSummary, PurchaseView, view_for};
pub use types::*;
