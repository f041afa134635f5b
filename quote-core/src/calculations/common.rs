//! Common utility functions for quote calculations.
//!
//! This module provides shared functionality used by the pricing models,
//! including rounding, rate lookup and currency formatting.

use rust_decimal::Decimal;

use crate::models::AreaRate;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Looks up the per-m² rate for `area` in a break-point table.
///
/// Rows are checked in order and the first row whose `below` threshold is
/// strictly greater than `area` wins, so an area sitting exactly on a
/// threshold falls into the next (cheaper) row. Areas past the last row use
/// `floor`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::AreaRate;
/// use quote_core::calculations::common::rate_for_area;
///
/// let table = [
///     AreaRate { below: 25, rate: dec!(100) },
///     AreaRate { below: 100, rate: dec!(80) },
/// ];
///
/// assert_eq!(rate_for_area(24, &table, dec!(50)), dec!(100));
/// assert_eq!(rate_for_area(25, &table, dec!(50)), dec!(80));
/// assert_eq!(rate_for_area(100, &table, dec!(50)), dec!(50));
/// ```
pub fn rate_for_area(
    area: u32,
    table: &[AreaRate],
    floor: Decimal,
) -> Decimal {
    table
        .iter()
        .find(|row| area < row.below)
        .map_or(floor, |row| row.rate)
}

/// Formats a value as Brazilian reais, e.g. `R$ 7.500,00`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$ {grouped},{cents}")
}
