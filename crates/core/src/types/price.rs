//! Best-effort price coercion using decimal arithmetic.
//!
//! Sheet prices are free-text cells. Sellers mostly type plain numbers, but
//! the column also carries entries like "N/A", "TBD", or blanks. Aggregation
//! must keep rendering regardless, so coercion is an explicit
//! coerce-or-default operation rather than a hidden error swallow.

use rust_decimal::Decimal;

/// Parse a price cell into a [`Decimal`].
///
/// Surrounding ASCII whitespace is ignored. Plain decimal notation is tried
/// first, then scientific notation. Currency symbols and thousands separators
/// are not stripped; "₹500" and "1,000" do not parse.
#[must_use]
pub fn parse(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Coerce a price cell, defaulting to zero when it does not parse.
///
/// Unparseable prices contribute nothing to sums; the row itself still
/// counts toward item totals.
#[must_use]
pub fn coerce_or_zero(raw: &str) -> Decimal {
    parse(raw).unwrap_or(Decimal::ZERO)
}
