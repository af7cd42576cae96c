//! Terminal purchase view.
//!
//! Runs the same cycle as the web page - fetch both sheets, authenticate,
//! filter, aggregate - and prints the result as a summary plus a fixed-width
//! table, or as JSON with `--json`.

use redline_core::{PurchaseView, authenticate, view_for};
use redline_web::config::TrackerConfig;
use redline_web::filters::format_inr;
use redline_web::sheets::SheetsClient;
use secrecy::ExposeSecret;

/// Cells wider than this are clipped in table output.
const MAX_CELL_WIDTH: usize = 40;

/// Run the full cycle and print the view.
pub async fn run(password: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = TrackerConfig::from_env()?;
    let client = SheetsClient::new(&config.sheets);

    let (sales, users) = tokio::join!(client.fetch_sales(), client.fetch_users());
    let sales = sales?;
    let users = users?;

    let master = config
        .master_password
        .as_ref()
        .map(ExposeSecret::expose_secret);
    let Some(identity) = authenticate(password, master, &users) else {
        return Err("invalid password".into());
    };

    let view = view_for(&identity, &sales);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let summary = view.summary;
    println!("Viewing as {}", identity.display_name());
    println!("Items:     {}", summary.item_count);
    println!("Total:     {}", format_inr(summary.total_value));
    println!(
        "Paid:      {} items, {}",
        summary.paid_count,
        format_inr(summary.paid_amount)
    );
    println!(
        "Pending:   {} items, {}",
        summary.pending_count(),
        format_inr(summary.pending_amount)
    );
    println!();
    print_table(&view);
    Ok(())
}

/// Print the filtered rows as a fixed-width table.
fn print_table(view: &PurchaseView) {
    let headers = view.purchases.headers();
    if headers.is_empty() {
        return;
    }

    let widths = column_widths(view);

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| format!("{header:<width$}"))
        .collect();
    println!("{}", header_line.join("  "));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );

    for row in view.purchases.rows() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", clip(cell)))
            .collect();
        println!("{}", cells.join("  ").trim_end());
    }
}

/// Widest content per column, clipped cells included, header as minimum.
fn column_widths(view: &PurchaseView) -> Vec<usize> {
    let headers = view.purchases.headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in view.purchases.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(clip(cell).chars().count());
        }
    }
    widths
}

/// Clip a cell to [`MAX_CELL_WIDTH`] characters with an ellipsis.
fn clip(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        cell.to_string()
    } else {
        let mut clipped: String = cell.chars().take(MAX_CELL_WIDTH - 1).collect();
        clipped.push('…');
        clipped
    }
}
