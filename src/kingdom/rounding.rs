//! Round-half-to-even helpers.
//!
//! Every rounding in the model goes through this module. Ties resolve to the
//! even neighbour, and decimal rounding works on the exact binary value of its
//! input: `0.125` is an exact tie and rounds to `0.12`, while `2.675` is stored
//! slightly below the tie and rounds to `2.67`.

// Mantissa and exponent extraction relies on deliberate integer casts
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

use std::cmp::Ordering;

/// Largest number of decimal digits `round_to` handles.
pub const MAX_DECIMAL_DIGITS: u32 = 6;

/// 2^63 as `f64`, the first value past the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Round to the nearest integer, ties to even.
#[must_use]
#[inline]
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Round to the nearest `i64`, ties to even.
///
/// Returns `None` for NaN, infinities, and values outside the `i64` range.
#[must_use]
pub fn round_to_i64(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round_ties_even();
    if rounded < -I64_LIMIT || rounded >= I64_LIMIT {
        return None;
    }
    Some(rounded as i64)
}

/// Round to `digits` decimal places, ties to even.
///
/// The result is the `f64` nearest to the rounded decimal, so
/// `round_to(1.0 - 0.01, 2) == 0.99`. Non-finite values and `digits` above
/// [`MAX_DECIMAL_DIGITS`] are returned unchanged.
#[must_use]
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() || digits > MAX_DECIMAL_DIGITS {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    // No fractional bits: already an integer.
    if exponent >= 0 {
        return value;
    }

    let scale = 10u128.pow(digits);
    let scaled = u128::from(mantissa) * scale;
    let shift = exponent.unsigned_abs();

    let quotient = if shift >= 128 {
        0
    } else {
        let whole = scaled >> shift;
        let remainder = scaled - (whole << shift);
        let half = 1u128 << (shift - 1);
        match remainder.cmp(&half) {
            Ordering::Less => whole,
            Ordering::Greater => whole + 1,
            Ordering::Equal => whole + (whole & 1),
        }
    };

    (quotient as f64 / scale as f64).copysign(value)
}
