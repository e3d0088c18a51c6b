//! Fee arithmetic on top of `rust_decimal`.
//!
//! Percentages arrive as `f64` but every computation after the conversion
//! happens in decimal, so monetary results carry no floating-point residue.

use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits a fee is rounded to.
pub const FEE_SCALE: u32 = 2;

/// Returns a zero fee with the fee scale, rendered as `0.00`.
pub fn zero_fee() -> Decimal {
    Decimal::new(0, FEE_SCALE)
}

/// Converts a percentage such as `2.5` into the rate `0.025`.
///
/// The percentage goes through its shortest round-trip text form first, so
/// `12.55` becomes exactly `0.1255`. Returns `None` for non-finite input or
/// values outside the decimal range.
pub fn percentage_to_rate(percentage: f64) -> Option<Decimal> {
    if !percentage.is_finite() {
        return None;
    }

    let percent = Decimal::from_str(&percentage.to_string())
        .ok()
        .or_else(|| Decimal::from_f64_retain(percentage))?;

    percent.checked_div(Decimal::ONE_HUNDRED)
}

/// Rounds `value` to `scale` fractional digits, ties away from zero.
///
/// The result always carries exactly `scale` digits (`1.2` becomes `1.20`).
///
/// # Examples
///
/// ```
/// use payment_transactions::decimal::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let raw = Decimal::from_str("1.255").unwrap();
/// assert_eq!(round_half_up(raw, 2).to_string(), "1.26");
/// ```
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// Computes `amount * percentage / 100`, rounded half-up to the fee scale.
///
/// Degenerate inputs (non-finite percentage, overflowing product) are
/// logged and produce a zero fee.
pub fn fee_for(amount: Decimal, percentage: f64) -> Decimal {
    let Some(rate) = percentage_to_rate(percentage) else {
        warn!("Fee percentage {} is not representable, using zero fee", percentage);
        return zero_fee();
    };

    match amount.checked_mul(rate) {
        Some(raw) => round_half_up(raw, FEE_SCALE),
        None => {
            warn!(
                "Fee for amount {} at {}% overflows, using zero fee",
                amount, percentage
            );
            zero_fee()
        }
    }
}
