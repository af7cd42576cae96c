//! The purchase view cycle: fetch both sheets, authenticate, filter, render.
//!
//! One POST runs the whole cycle. Nothing is cached and nothing survives the
//! request - the purchases page carries the password in a hidden field so the
//! refresh button simply re-submits the same cycle.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::instrument;

use redline_core::{Identity, PurchaseView, authenticate, view_for};

use crate::filters;
use crate::routes::home::HomeTemplate;
use crate::state::AppState;

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// A rendered table cell.
pub enum TableCell {
    /// Plain text, the default for every column.
    Text(String),
    /// A listing link, rendered as a "View Listing" anchor.
    Link(String),
    /// A product image URL, rendered inline.
    Image(String),
}

/// Purchases page template: welcome banner, metrics row, purchases table.
#[derive(Template, WebTemplate)]
#[template(path = "purchases.html")]
pub struct PurchasesTemplate {
    pub is_master: bool,
    pub viewer_name: String,
    /// Carried in a hidden field so the refresh button re-runs the cycle.
    pub password: String,
    pub item_count: usize,
    pub paid_count: usize,
    pub total_value: String,
    pub paid_amount: String,
    pub pending_amount: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

/// Header of the column rendered as listing links.
const LINK_COLUMN: &str = "Post Link";
/// Header of the column rendered as inline images.
const IMAGE_COLUMN: &str = "Image address";

const DATA_UNAVAILABLE: &str =
    "Failed to load data from the sheets. Please check your connection and try again.";
const INVALID_PASSWORD: &str = "Invalid password. Please check your password and try again.";

/// Run one full view cycle for a submitted password.
///
/// Both sheets are fetched fresh and concurrently; the cycle waits for both
/// before authenticating. Either failing collapses into a single
/// data-unavailable outcome - the user never learns which sheet broke.
#[instrument(skip_all)]
pub async fn view(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if form.password.is_empty() {
        return HomeTemplate { error: None }.into_response();
    }

    let (sales, users) = tokio::join!(
        state.sheets().fetch_sales(),
        state.sheets().fetch_users(),
    );
    let (sales, users) = match (sales, users) {
        (Ok(sales), Ok(users)) => (sales, users),
        (sales, users) => {
            for error in [sales.err(), users.err()].into_iter().flatten() {
                tracing::error!(%error, "sheet fetch failed");
            }
            return HomeTemplate {
                error: Some(DATA_UNAVAILABLE.to_string()),
            }
            .into_response();
        }
    };

    let master = state
        .config()
        .master_password
        .as_ref()
        .map(ExposeSecret::expose_secret);
    let Some(identity) = authenticate(&form.password, master, &users) else {
        return HomeTemplate {
            error: Some(INVALID_PASSWORD.to_string()),
        }
        .into_response();
    };

    tracing::info!(viewer = identity.display_name(), "password resolved");
    let view = view_for(&identity, &sales);
    purchases_page(&identity, &view, form.password).into_response()
}

/// Build the purchases template from a computed view.
fn purchases_page(identity: &Identity, view: &PurchaseView, password: String) -> PurchasesTemplate {
    let summary = view.summary;
    let headers = view.purchases.headers().to_vec();
    let rows = view
        .purchases
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(idx, cell)| make_cell(&headers, idx, cell))
                .collect()
        })
        .collect();

    PurchasesTemplate {
        is_master: identity.is_master(),
        viewer_name: identity.display_name().to_string(),
        password,
        item_count: summary.item_count,
        paid_count: summary.paid_count,
        total_value: filters::format_inr(summary.total_value),
        paid_amount: filters::format_inr(summary.paid_amount),
        pending_amount: filters::format_inr(summary.pending_amount),
        headers,
        rows,
    }
}

/// Decide how a cell renders based on its column header.
fn make_cell(headers: &[String], idx: usize, cell: &str) -> TableCell {
    match headers.get(idx).map(String::as_str) {
        Some(LINK_COLUMN) if !cell.is_empty() => TableCell::Link(cell.to_string()),
        Some(IMAGE_COLUMN) if !cell.is_empty() => TableCell::Image(cell.to_string()),
        _ => TableCell::Text(cell.to_string()),
    }
}
