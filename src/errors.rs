//! Error types for sexagesimal splitting and formatting.
//!
//! Every failure in this crate is one of a small, closed set of causes, so
//! the error type is a field-less enum rather than the message-carrying
//! style used for calculation pipelines. Calling code (and tests) match on
//! the variant directly instead of parsing strings.
//!
//! # Two taxonomies
//!
//! The formatter distinguishes *specification errors* from *value
//! overflows*:
//!
//! - A bad verb or out-of-range precision is a programmer error in the
//!   format specifier. It is rendered as an inline diagnostic literal
//!   (e.g. `%!x(BADVERB)`) and never appears as a [`SexaError`].
//! - NaN/infinite inputs, mantissa precision loss, and first-segment
//!   width overflow are *value* problems under an otherwise valid
//!   specifier. They render as a fixed-width run of asterisks, with the
//!   specific variant reported out-of-band in
//!   [`FormatResult::error`](crate::format::FormatResult::error).
//!
//! # Example
//!
//! ```
//! use celestial_sexa::{split60, SexaError};
//!
//! // Precision 15 needs 10^15 as an exact scale factor; a magnitude of
//! // 10 units pushes the scaled integer past the f64 mantissa.
//! assert_eq!(split60(10.0, 15, false), Err(SexaError::LossOfPrecision));
//! ```

use thiserror::Error;

/// Failure causes for sexagesimal splitting and formatting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SexaError {
    /// Input value is NaN.
    #[error("value is NaN")]
    NaN,

    /// Input value is positive infinity.
    #[error("value is positive infinity")]
    PositiveInfinity,

    /// Input value is negative infinity.
    #[error("value is negative infinity")]
    NegativeInfinity,

    /// The scaled integer exceeds 2^52 and cannot be represented exactly
    /// in a float64 mantissa. Value-dependent: precision 15 is fine for
    /// magnitudes under ~4.5 arcseconds but not for magnitudes near 1°.
    #[error("loss of precision in float64 mantissa")]
    LossOfPrecision,

    /// Requested precision is outside 0..=15.
    #[error("precision must be in 0..=15")]
    InvalidPrecision,

    /// The integer degrees do not fit the requested first-segment width.
    #[error("degrees do not fit the requested width")]
    DegreeOverflow,

    /// The integer hours do not fit the requested first-segment width.
    #[error("hours do not fit the requested width")]
    HourOverflow,
}

/// Result type alias for sexagesimal operations.
pub type SexaResult<T> = Result<T, SexaError>;
