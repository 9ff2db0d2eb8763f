//! Monetary types for odds and stake representation.

use rust_decimal::Decimal;

/// Decimal odds: the multiplier applied to a stake to compute gross return.
/// Greater than 1.0 in practice.
pub type Odds = Decimal;

/// Stake amount represented as a Decimal for precision.
pub type Stake = Decimal;

/// Format an amount for display with two decimal places.
///
/// Rounding is a presentation concern only; totals accumulate at full
/// precision and are rounded here at render time.
#[must_use]
pub fn display_amount(value: Decimal) -> String {
    format!("{value:.2}")
}
