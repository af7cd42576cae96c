//! Integration tests for Redline Ledger.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the web server with sheet URLs configured
//! cargo run -p redline-web
//!
//! # Run the ignored end-to-end tests against it
//! cargo test -p redline-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `REDLINE_BASE_URL` - Base URL of the running server
//!   (default: `http://localhost:3000`)
//! - `REDLINE_MASTER_PASSWORD` - Needed by the master-view test; must match
//!   the server's configuration
//!
//! The tests hit live sheet exports through the server, so they assume
//! whatever data the configured sheets currently hold; assertions stick to
//! structure (banners, metrics labels) rather than row contents.
