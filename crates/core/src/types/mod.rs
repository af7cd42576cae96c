//! Core types for Redline Ledger.
//!
//! This module provides the tabular and domain types shared by the
//! authenticator and the purchase aggregator.

pub mod identity;
pub mod price;
pub mod sheet;
pub mod status;

pub use identity::Identity;
pub use sheet::Sheet;
pub use status::PaymentState;
