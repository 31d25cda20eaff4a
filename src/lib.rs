//! Sexagesimal angle and time formatting for astronomical calculations.
//!
//! `celestial-sexa` provides the display layer that astronomical
//! computation pipelines feed: typed wrappers for angles, hour angles,
//! right ascensions, and durations, and a formatter that renders them in
//! base-60 notation (`-13°47′22″`, `9ʰ14ᵐ55.8ˢ`) under a small
//! printf-style specifier grammar.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Value types ([`Angle`], [`HourAngle`], [`RightAscension`], [`Time`]), wrapping, arithmetic |
//! | [`format`] | [`FormatSpec`] grammar and the rendering pipeline |
//! | [`split`] | The base-60 split primitive with the f64 mantissa guard |
//! | [`symbols`] | Unit-symbol tables, decimal/unit fusion and stripping |
//! | [`constants`] | Unit-conversion constants and mantissa/precision limits |
//! | [`errors`] | [`SexaError`] and [`SexaResult`] |
//!
//! # Quick start
//!
//! ```
//! use celestial_sexa::{Angle, FormatSpec, RightAscension};
//!
//! // Declination-style angle, default seconds-decimal rendering
//! let dec = Angle::from_sexagesimal(true, 13, 47, 22.0);
//! assert_eq!(dec.to_string(), "-13°47′22″");
//!
//! // Right ascension wraps into [0, 24h) and never shows a sign
//! let ra = RightAscension::from_hours(-1.5);
//! assert_eq!(ra.format(&FormatSpec::parse(".1s")).text(), "22ʰ30ᵐ0.0ˢ");
//! ```
//!
//! # Failure model
//!
//! A malformed specifier (unknown verb, precision above 15) is a
//! programmer error and renders as an inline diagnostic such as
//! `%!x(BADVERB)`. A value that cannot be represented under a valid
//! specifier (NaN, infinities, f64 mantissa precision loss, first
//! segment wider than the requested width) renders as a run of asterisks
//! matching the width of the zero-valued render, with the cause reported
//! out-of-band:
//!
//! ```
//! use celestial_sexa::{Angle, FormatSpec, SexaError};
//!
//! let r = Angle::from_radians(f64::INFINITY).format(&FormatSpec::default());
//! assert!(r.text().chars().all(|c| c == '*'));
//! assert_eq!(r.error(), Some(SexaError::PositiveInfinity));
//! ```
//!
//! # Design notes
//!
//! - **Pure functions over hidden state.** Symbol tables are an explicit
//!   [`Symbols`] configuration with a `Default`, not process globals, and
//!   the formatter returns its error out-of-band in [`FormatResult`]
//!   instead of mutating a wrapper field.
//! - **Precision ceiling 15.** `10^16` exceeds the f64 mantissa, so no
//!   specifier beyond 15 fractional digits can be exact. Whether a given
//!   precision works for a given *value* is checked separately by the
//!   split primitive's 2^52 guard.
//! - **Distinct value types.** All four wrap one f64, but mixing them
//!   requires explicit conversion, keeping unit confusion a compile
//!   error.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod format;
pub mod math;
pub mod split;
pub mod symbols;

pub use angle::{Angle, HourAngle, RightAscension, Time};
pub use errors::{SexaError, SexaResult};
pub use format::{FormatResult, FormatSpec};
pub use split::{format_fixed, split60, Split};
pub use symbols::{Symbols, UnitSymbols};
