//! Purchase filtering and summary statistics over the sales sheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Identity, PaymentState, Sheet, price};

/// Header of the buyer column in the sales sheet.
pub const BUYER_COLUMN: &str = "Buyer";
/// Header of the price column in the sales sheet.
pub const PRICE_COLUMN: &str = "Price";
/// Header of the payment-status column in the sales sheet.
pub const PAYMENT_STATUS_COLUMN: &str = "Payment Status";

/// Aggregate statistics over one buyer's purchases (or the whole ledger for
/// the master identity). Recomputed every cycle, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Number of purchase rows.
    pub item_count: usize,
    /// Sum of coerced prices over all rows.
    pub total_value: Decimal,
    /// Number of rows whose status reads as paid.
    pub paid_count: usize,
    /// Sum of coerced prices over paid rows.
    pub paid_amount: Decimal,
    /// Sum of coerced prices over unpaid rows.
    pub pending_amount: Decimal,
}

impl PurchaseSummary {
    /// Number of rows still awaiting payment.
    #[must_use]
    pub const fn pending_count(&self) -> usize {
        self.item_count - self.paid_count
    }
}

/// One identity's view of the ledger: the filtered rows plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseView {
    /// The filtered sales rows, source order preserved, all columns intact.
    pub purchases: Sheet,
    /// Statistics over `purchases`.
    pub summary: PurchaseSummary,
}

/// Compute an identity's view of the sales sheet.
///
/// The master identity sees every row; a buyer sees exactly the rows whose
/// buyer cell equals their name. Descriptive columns pass through untouched
/// for display.
#[must_use]
pub fn view_for(identity: &Identity, sales: &Sheet) -> PurchaseView {
    let purchases = match identity {
        Identity::Master => sales.clone(),
        Identity::Buyer(name) => match sales.column(BUYER_COLUMN) {
            Some(buyer_col) => {
                sales.retain_rows(|row| row.get(buyer_col).is_some_and(|cell| cell == name))
            }
            // Without a buyer column nothing can be attributed to a buyer.
            None => Sheet::new(sales.headers().to_vec(), Vec::new()),
        },
    };

    let summary = summarize(&purchases);
    PurchaseView { purchases, summary }
}

/// Summarize a set of purchase rows.
///
/// When the price or payment-status column is missing the summary degrades to
/// all zeros instead of failing - the table must still render. Individual
/// unparseable prices contribute zero to the sums but the row still counts.
fn summarize(purchases: &Sheet) -> PurchaseSummary {
    let (Some(price_col), Some(status_col)) = (
        purchases.column(PRICE_COLUMN),
        purchases.column(PAYMENT_STATUS_COLUMN),
    ) else {
        return PurchaseSummary::default();
    };

    let mut summary = PurchaseSummary {
        item_count: purchases.len(),
        ..PurchaseSummary::default()
    };

    for row in purchases.rows() {
        let amount = row
            .get(price_col)
            .map_or(Decimal::ZERO, |cell| price::coerce_or_zero(cell));
        summary.total_value += amount;

        let state = row
            .get(status_col)
            .map_or(PaymentState::Pending, |cell| PaymentState::from_label(cell));
        if state.is_paid() {
            summary.paid_count += 1;
            summary.paid_amount += amount;
        } else {
            summary.pending_amount += amount;
        }
    }

    summary
}
