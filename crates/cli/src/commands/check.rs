//! Sheet connectivity check.
//!
//! Fetches both configured CSV exports and reports their dimensions. Exits
//! non-zero when either sheet is unreachable or unparseable, which makes it
//! usable from deploy scripts and cron.

use redline_web::config::TrackerConfig;
use redline_web::sheets::SheetsClient;

/// Fetch both sheets and report their dimensions.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = TrackerConfig::from_env()?;
    let client = SheetsClient::new(&config.sheets);

    let (sales, users) = tokio::join!(client.fetch_sales(), client.fetch_users());
    let sales = sales?;
    let users = users?;

    println!(
        "sales sheet: {} rows x {} columns",
        sales.len(),
        sales.headers().len()
    );
    println!(
        "users sheet: {} rows x {} columns",
        users.len(),
        users.headers().len()
    );
    Ok(())
}
