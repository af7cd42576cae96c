//! HTTP route handlers for the purchase viewer.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Landing page with the password form
//! POST /purchases     - Run a view cycle: fetch both sheets, authenticate,
//!                       filter, aggregate, render (also wired to the
//!                       purchases page's refresh button)
//!
//! # Wired in main
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (users sheet reachable)
//! GET  /static/*      - Stylesheet and assets
//! ```

pub mod home;
pub mod purchases;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/purchases", post(purchases::view))
}
