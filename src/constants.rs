//! Mathematical and unit-conversion constants for sexagesimal arithmetic.
//!
//! Values are written out to full f64 precision. The mantissa limit
//! [`MAX_SPLIT_INT`] is the key constant for this crate: it bounds the
//! scaled integers the split primitive can produce without losing
//! precision in the float64 mantissa.

#[allow(clippy::excessive_precision)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const TWOPI: f64 = 6.283185307179586476925287;

/// Degrees per hour of right ascension or hour angle (24h = 360°).
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Arcseconds (or seconds of time) per first-segment unit.
pub const SECONDS_PER_UNIT: f64 = 3600.0;

/// Minutes per first-segment unit.
pub const MINUTES_PER_UNIT: f64 = 60.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const HOURS_PER_DAY: f64 = 24.0;

/// Largest integer exactly representable in a float64 mantissa (2^52).
///
/// A value scaled by `10^precision` that rounds past this limit cannot be
/// split into sexagesimal segments without silently losing digits, so the
/// split primitive reports `LossOfPrecision` instead.
pub const MAX_SPLIT_INT: f64 = 4_503_599_627_370_496.0;

/// Highest decimal precision the formatter accepts.
///
/// `10^16` exceeds the f64 mantissa, so requesting more than 15 fractional
/// digits can never produce an exact scale factor.
pub const MAX_PRECISION: u8 = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_split_int_is_2_pow_52() {
        assert_eq!(MAX_SPLIT_INT, (1u64 << 52) as f64);
    }

    #[test]
    fn test_hour_degree_scaling() {
        assert_eq!(DEGREES_PER_HOUR * HOURS_PER_DAY, 360.0);
        assert_eq!(SECONDS_PER_UNIT, MINUTES_PER_UNIT * 60.0);
    }
}
