//! The base-60 split primitive underlying all sexagesimal formatting.
//!
//! [`split60`] decomposes a floating-point magnitude into an integer
//! base-60 quotient and a fixed-precision remainder string in [0, 60).
//! It is the one place in the crate where float rounding meets string
//! conversion, and the one place where the f64 mantissa limit is checked.
//!
//! # Precision loss is value-dependent
//!
//! The split scales the magnitude by `10^precision` and rounds to an
//! integer. Integers above 2^52 are not exactly representable in a float64
//! mantissa, so whether a given precision works depends on the magnitude:
//!
//! ```
//! use celestial_sexa::{split60, SexaError};
//!
//! // Precision 15 works for magnitudes under ~4.5 units...
//! assert!(split60(4.500000123456789, 15, false).is_ok());
//!
//! // ...but not for a magnitude of 10 units.
//! assert_eq!(split60(10.0, 15, false), Err(SexaError::LossOfPrecision));
//! ```
//!
//! # Remainder string
//!
//! The remainder is returned already formatted: zero-padded to at least
//! `precision + 1` digits (`precision + 2` when `pad` is set, giving a
//! two-digit integer part), with a `.` inserted `precision` digits from
//! the right when `precision > 0`. The formatter swaps in a configured
//! decimal separator afterwards if it differs from `.`.
//!
//! ```
//! use celestial_sexa::split60;
//!
//! let sp = split60(75.0, 1, false).unwrap();
//! assert_eq!((sp.neg, sp.quo, sp.rem.as_str()), (false, 1, "15.0"));
//! ```

use crate::constants::{MAX_PRECISION, MAX_SPLIT_INT};
use crate::errors::{SexaError, SexaResult};
use crate::math::pow10;

/// Result of a base-60 split: sign, quotient, and remainder string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// True when the input magnitude was negative.
    pub neg: bool,
    /// Integer quotient of 60 (e.g. whole minutes when splitting seconds).
    pub quo: i64,
    /// Remainder in [0, 60) as a fixed-precision decimal string.
    pub rem: String,
}

/// Splits a magnitude into a base-60 quotient and remainder string.
///
/// # Arguments
///
/// * `x` - Any f64; the sign is extracted and the magnitude split.
/// * `precision` - Fractional digits for the remainder, 0..=15.
/// * `pad` - Zero-pad the remainder's integer part to two digits.
///
/// # Errors
///
/// NaN and infinities are rejected first ([`SexaError::NaN`],
/// [`SexaError::PositiveInfinity`], [`SexaError::NegativeInfinity`]),
/// then an out-of-range precision ([`SexaError::InvalidPrecision`]),
/// then the mantissa guard ([`SexaError::LossOfPrecision`]) when
/// `round(|x| * 10^precision)` exceeds 2^52.
///
/// # Example
///
/// ```
/// use celestial_sexa::split60;
///
/// // 75 seconds = 1 minute 15 seconds
/// let sp = split60(75.0, 0, false).unwrap();
/// assert_eq!((sp.neg, sp.quo, sp.rem.as_str()), (false, 1, "15"));
/// ```
pub fn split60(x: f64, precision: u8, pad: bool) -> SexaResult<Split> {
    let (neg, scaled) = scale_checked(x, precision)?;
    let i = scaled as i64;
    let div = 60 * pow10(precision) as i64;
    Ok(Split {
        neg,
        quo: i / div,
        rem: digits(i % div, precision, pad),
    })
}

/// Fixed-precision decimal rendering with the same mantissa guard as
/// [`split60`], without the base-60 division.
///
/// Used by the formatter when the first segment itself carries the
/// decimal point, so the whole magnitude becomes one decimal string.
///
/// # Errors
///
/// Same conditions as [`split60`].
///
/// # Example
///
/// ```
/// use celestial_sexa::format_fixed;
///
/// assert_eq!(format_fixed(-23.4375, 2, false).unwrap(), (true, "23.44".to_string()));
/// ```
pub fn format_fixed(x: f64, precision: u8, pad: bool) -> SexaResult<(bool, String)> {
    let (neg, scaled) = scale_checked(x, precision)?;
    Ok((neg, digits(scaled as i64, precision, pad)))
}

/// Validates the input, extracts the sign, and scales the magnitude by
/// `10^precision` with round-half-up, enforcing the 2^52 mantissa limit.
fn scale_checked(x: f64, precision: u8) -> SexaResult<(bool, f64)> {
    if x.is_nan() {
        return Err(SexaError::NaN);
    }
    if x == f64::INFINITY {
        return Err(SexaError::PositiveInfinity);
    }
    if x == f64::NEG_INFINITY {
        return Err(SexaError::NegativeInfinity);
    }
    if precision > MAX_PRECISION {
        return Err(SexaError::InvalidPrecision);
    }

    let scaled = x.abs() * pow10(precision) + 0.5;
    if scaled > MAX_SPLIT_INT {
        return Err(SexaError::LossOfPrecision);
    }

    Ok((x < 0.0, scaled))
}

/// Renders a scaled integer as a decimal string with `precision`
/// fractional digits and at least one (or two, when `pad`) integer digits.
fn digits(r: i64, precision: u8, pad: bool) -> String {
    let min_len = usize::from(precision) + if pad { 2 } else { 1 };
    let mut s = format!("{r:0min_len$}");
    if precision > 0 {
        s.insert(s.len() - usize::from(precision), '.');
    }
    s
}
