//! Sheet export client.
//!
//! Both tables live in a spreadsheet published as CSV exports: the shared
//! sales ledger and the users sheet. Every view cycle fetches them fresh over
//! HTTP - there is no cache to invalidate, so the refresh action is just this
//! fetch again. Either sheet failing aborts the whole cycle; there is no
//! partial-success mode.

mod parse;

pub use parse::ParseError;

use std::sync::Arc;

use redline_core::Sheet;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::SheetSourceConfig;

/// Errors that can occur when fetching a sheet export.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The export responded with a non-success status.
    #[error("unexpected status {0} from sheet export")]
    Status(StatusCode),

    /// The response body was not a CSV table.
    #[error("CSV parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Client for the two sheet CSV exports.
#[derive(Clone)]
pub struct SheetsClient {
    inner: Arc<SheetsClientInner>,
}

struct SheetsClientInner {
    client: reqwest::Client,
    sales_url: String,
    users_url: String,
}

impl SheetsClient {
    /// Create a new sheet export client.
    #[must_use]
    pub fn new(config: &SheetSourceConfig) -> Self {
        Self {
            inner: Arc::new(SheetsClientInner {
                client: reqwest::Client::new(),
                sales_url: config.sales_url.clone(),
                users_url: config.users_url.clone(),
            }),
        }
    }

    /// Fetch and parse the sales ledger sheet.
    ///
    /// # Errors
    ///
    /// Returns `SheetsError` on transport failure, non-success status, or
    /// unparseable content.
    #[instrument(skip(self))]
    pub async fn fetch_sales(&self) -> Result<Sheet, SheetsError> {
        self.fetch(&self.inner.sales_url, "sales").await
    }

    /// Fetch and parse the users sheet.
    ///
    /// # Errors
    ///
    /// Returns `SheetsError` on transport failure, non-success status, or
    /// unparseable content.
    #[instrument(skip(self))]
    pub async fn fetch_users(&self) -> Result<Sheet, SheetsError> {
        self.fetch(&self.inner.users_url, "users").await
    }

    async fn fetch(&self, url: &str, sheet: &'static str) -> Result<Sheet, SheetsError> {
        let response = self.inner.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, sheet, "sheet export returned non-success status");
            return Err(SheetsError::Status(status));
        }

        let body = response.text().await?;
        let table = parse::parse_sheet(&body)?;
        debug!(
            sheet,
            rows = table.len(),
            columns = table.headers().len(),
            "sheet fetched"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SheetsError::Status(StatusCode::FORBIDDEN);
        assert_eq!(
            err.to_string(),
            "unexpected status 403 Forbidden from sheet export"
        );

        let err = SheetsError::Parse(ParseError::MissingHeader);
        assert!(err.to_string().contains("no header row"));
    }
}
