//! The formatting pipeline: a single-pass decision procedure with six
//! ordered gates.
//!
//! 1. **Verb gate** — unrecognized verbs emit an inline `%!x(BADVERB)`
//!    diagnostic (a specifier bug, not a data problem).
//! 2. **Precision gate** — precision outside 0..=15 emits `%!(BADPREC)`.
//! 3. **Value sanity gate** — NaN and infinities route to the overflow
//!    rendering.
//! 4. **Segment decomposition** — the split primitive breaks the
//!    magnitude at the decimal-bearing segment; mantissa precision loss
//!    routes to the overflow rendering.
//! 5. **Elision and composition** — leading zero segments are dropped
//!    unless forced, the first segment is width-checked and padded, the
//!    sign is prefixed (never for right ascension), and the unit-fusion
//!    convention is applied to the decimal-bearing segment.
//! 6. **Overflow rendering** — any failure from stages 3–5 yields a run
//!    of asterisks as wide as the zero-valued render under the same
//!    specifier, with the cause reported out-of-band in [`FormatResult`].
//!
//! The pipeline is pure: identical inputs produce identical text and
//! identical error state.
//!
//! # Examples
//!
//! ```
//! use celestial_sexa::{Angle, FormatSpec};
//!
//! let a = Angle::from_sexagesimal(true, 13, 47, 22.0);
//! assert_eq!(a.format(&FormatSpec::default()).text(), "-13°47′22″");
//!
//! // Leading zero segments are elided unless forced with `#`
//! let small = Angle::from_sexagesimal(true, 0, 32, 41.0);
//! assert_eq!(small.format(&FormatSpec::default()).text(), "-32′41″");
//! assert_eq!(small.format(&FormatSpec::parse("#s")).text(), "-0°32′41″");
//! ```
//!
//! ```
//! use celestial_sexa::{FormatSpec, SexaError, Time};
//!
//! // NaN renders as asterisks; the cause is out-of-band
//! let bad = Time::from_seconds(f64::NAN);
//! let r = bad.format(&FormatSpec::default());
//! assert!(r.text().chars().all(|c| c == '*'));
//! assert_eq!(r.error(), Some(SexaError::NaN));
//! ```

use core::fmt;

use crate::angle::{Angle, HourAngle, RightAscension, Time};
use crate::constants::{MAX_PRECISION, MINUTES_PER_UNIT, SECONDS_PER_UNIT};
use crate::errors::{SexaError, SexaResult};
use crate::split::{format_fixed, split60};
use crate::symbols::{combine_unit, insert_unit, Symbols, UnitSymbols};

use super::spec::{FormatSpec, Fusion, Segment, Verb};

/// The outcome of one format call: the rendered text plus the
/// out-of-band overflow cause, if any.
///
/// Specification errors (bad verb, bad precision) appear only in the
/// text, as inline diagnostics; [`error`](Self::error) is reserved for
/// value overflows, where the text is an asterisk run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    text: String,
    error: Option<SexaError>,
}

impl FormatResult {
    /// The rendered text (or asterisk run / inline diagnostic).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the result, returning the rendered text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// The overflow cause, when the text is an asterisk run.
    pub fn error(&self) -> Option<SexaError> {
        self.error
    }

    /// True when the value could not be represented under the specifier.
    pub fn is_overflow(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Display for FormatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Per-call rendering parameters derived from the value type.
struct Params<'a> {
    units: &'a UnitSymbols,
    sep: &'a str,
    mark: char,
    suppress_sign: bool,
    width_err: SexaError,
}

/// Formats an [`Angle`] with the degree-based symbol table.
pub fn format_angle(a: Angle, spec: &FormatSpec, symbols: &Symbols) -> FormatResult {
    run(
        a.degrees(),
        &Params {
            units: &symbols.dms,
            sep: &symbols.decimal_sep,
            mark: symbols.combine_mark,
            suppress_sign: false,
            width_err: SexaError::DegreeOverflow,
        },
        spec,
    )
}

/// Formats an [`HourAngle`] with the hour-based symbol table.
pub fn format_hour_angle(h: HourAngle, spec: &FormatSpec, symbols: &Symbols) -> FormatResult {
    run(
        h.hours(),
        &Params {
            units: &symbols.hms,
            sep: &symbols.decimal_sep,
            mark: symbols.combine_mark,
            suppress_sign: false,
            width_err: SexaError::HourOverflow,
        },
        spec,
    )
}

/// Formats a [`RightAscension`]. Sign flags are suppressed: right
/// ascension is never displayed with an explicit sign.
pub fn format_right_ascension(
    ra: RightAscension,
    spec: &FormatSpec,
    symbols: &Symbols,
) -> FormatResult {
    run(
        ra.hours(),
        &Params {
            units: &symbols.hms,
            sep: &symbols.decimal_sep,
            mark: symbols.combine_mark,
            suppress_sign: true,
            width_err: SexaError::HourOverflow,
        },
        spec,
    )
}

/// Formats a [`Time`] with the hour-based symbol table, first segment in
/// hours.
pub fn format_time(t: Time, spec: &FormatSpec, symbols: &Symbols) -> FormatResult {
    run(
        t.hours(),
        &Params {
            units: &symbols.hms,
            sep: &symbols.decimal_sep,
            mark: symbols.combine_mark,
            suppress_sign: false,
            width_err: SexaError::HourOverflow,
        },
        spec,
    )
}

/// Stages 1, 2, and 6 around the composition stages.
fn run(x: f64, p: &Params<'_>, spec: &FormatSpec) -> FormatResult {
    // Stage 1: verb gate
    let Some(verb) = Verb::from_char(spec.verb) else {
        return FormatResult {
            text: format!("%!{}(BADVERB)", spec.verb),
            error: None,
        };
    };

    // Stage 2: precision gate
    if spec.precision > MAX_PRECISION {
        return FormatResult {
            text: "%!(BADPREC)".to_string(),
            error: None,
        };
    }

    match compose(x, p, spec, verb) {
        Ok(text) => FormatResult { text, error: None },
        Err(e) => {
            // Stage 6: the asterisk run is as wide as the zero-valued
            // render under the same specifier. Zero splits at any valid
            // precision, so this cannot recurse; a degenerate width that
            // rejects even "0" falls back to the width itself.
            let n = match compose(0.0, p, spec, verb) {
                Ok(mock) => mock.chars().count(),
                Err(_) => spec.width.unwrap_or(1).max(1),
            };
            FormatResult {
                text: "*".repeat(n),
                error: Some(e),
            }
        }
    }
}

/// Stages 3–5: sanity gate, decomposition, elision and composition.
fn compose(x: f64, p: &Params<'_>, spec: &FormatSpec, verb: Verb) -> SexaResult<String> {
    // Stage 3: value sanity gate
    if x.is_nan() {
        return Err(SexaError::NaN);
    }
    if x == f64::INFINITY {
        return Err(SexaError::PositiveInfinity);
    }
    if x == f64::NEG_INFINITY {
        return Err(SexaError::NegativeInfinity);
    }

    // Stage 4: segment decomposition. The decimal-bearing segment's
    // integer part is padded to two digits when zero-padding is on or a
    // width is given (the first segment pads at stage 5 instead).
    let pad = spec.zero || spec.width.is_some();
    let (neg, first, minutes, dec) = match verb.segment {
        Segment::Seconds => {
            let sp = split60(x * SECONDS_PER_UNIT, spec.precision, pad)?;
            (sp.neg, Some(sp.quo / 60), Some(sp.quo % 60), sp.rem)
        }
        Segment::Minutes => {
            let sp = split60(x * MINUTES_PER_UNIT, spec.precision, pad)?;
            (sp.neg, Some(sp.quo), None, sp.rem)
        }
        Segment::First => {
            let (neg, s) = format_fixed(x, spec.precision, false)?;
            (neg, None, None, s)
        }
    };

    // Stage 5: elision, width gate, sign, unit fusion.
    let first_str = first.map(|q| q.to_string());
    let first_digits = match &first_str {
        Some(s) => s.len(),
        // First segment carries the decimal: count digits before the dot.
        None => dec.find('.').unwrap_or(dec.len()),
    };

    let show_first = match verb.segment {
        Segment::First => true,
        _ => spec.hash || spec.width.is_some() || first != Some(0),
    };
    let show_minutes = match verb.segment {
        Segment::Seconds => show_first || spec.hash || minutes != Some(0),
        _ => false,
    };

    let (mut zero_fill, mut space_fill) = (0usize, 0usize);
    if let Some(w) = spec.width {
        if first_digits > w {
            return Err(p.width_err);
        }
        if spec.zero {
            zero_fill = w - first_digits;
        } else {
            space_fill = w - first_digits;
        }
    }

    let sign = if p.suppress_sign {
        None
    } else if neg {
        Some('-')
    } else if spec.plus {
        Some('+')
    } else if spec.space {
        Some(' ')
    } else {
        None
    };

    let dec_unit = match verb.segment {
        Segment::Seconds => p.units.sec,
        Segment::Minutes => p.units.min,
        Segment::First => p.units.first,
    };

    let mut out = String::new();
    if !spec.minus {
        out.extend(std::iter::repeat(' ').take(space_fill));
    }
    if let Some(c) = sign {
        out.push(c);
    }

    if show_first {
        out.extend(std::iter::repeat('0').take(zero_fill));
        if let Some(s) = &first_str {
            out.push_str(s);
            out.push(p.units.first);
        }
        // When the first segment carries the decimal, the fused string
        // below is the first segment.
    }
    if show_minutes {
        let m = minutes.unwrap_or(0);
        if spec.zero {
            out.push_str(&format!("{m:02}"));
        } else {
            out.push_str(&m.to_string());
        }
        out.push(p.units.min);
    }
    out.push_str(&fuse(&dec, dec_unit, verb.fusion, p));

    if spec.minus {
        out.extend(std::iter::repeat(' ').take(space_fill));
    }

    Ok(out)
}

/// Applies the unit-fusion convention to the decimal-bearing segment,
/// swapping the split primitive's `.` for the configured separator first.
fn fuse(dec: &str, unit: char, fusion: Fusion, p: &Params<'_>) -> String {
    let dec = dec.replace('.', p.sep);
    match fusion {
        Fusion::Append => {
            let mut s = dec;
            s.push(unit);
            s
        }
        Fusion::Insert => insert_unit(&dec, unit, p.sep),
        Fusion::Combine => combine_unit(&dec, unit, p.sep, p.mark),
    }
}

impl Angle {
    /// Formats with the default symbol configuration (°, ′, ″).
    pub fn format(self, spec: &FormatSpec) -> FormatResult {
        format_angle(self, spec, &Symbols::default())
    }

    /// Formats with an explicit symbol configuration.
    pub fn format_with(self, spec: &FormatSpec, symbols: &Symbols) -> FormatResult {
        format_angle(self, spec, symbols)
    }
}

impl HourAngle {
    /// Formats with the default symbol configuration (ʰ, ᵐ, ˢ).
    pub fn format(self, spec: &FormatSpec) -> FormatResult {
        format_hour_angle(self, spec, &Symbols::default())
    }

    /// Formats with an explicit symbol configuration.
    pub fn format_with(self, spec: &FormatSpec, symbols: &Symbols) -> FormatResult {
        format_hour_angle(self, spec, symbols)
    }
}

impl RightAscension {
    /// Formats with the default symbol configuration (ʰ, ᵐ, ˢ), never
    /// with a sign.
    pub fn format(self, spec: &FormatSpec) -> FormatResult {
        format_right_ascension(self, spec, &Symbols::default())
    }

    /// Formats with an explicit symbol configuration.
    pub fn format_with(self, spec: &FormatSpec, symbols: &Symbols) -> FormatResult {
        format_right_ascension(self, spec, symbols)
    }
}

impl Time {
    /// Formats with the default symbol configuration (ʰ, ᵐ, ˢ).
    pub fn format(self, spec: &FormatSpec) -> FormatResult {
        format_time(self, spec, &Symbols::default())
    }

    /// Formats with an explicit symbol configuration.
    pub fn format_with(self, spec: &FormatSpec, symbols: &Symbols) -> FormatResult {
        format_time(self, spec, symbols)
    }
}

impl fmt::Display for Angle {
    /// Formats with the default specifier (`v`: seconds-decimal, append,
    /// precision 0).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format(&FormatSpec::default()).text())
    }
}

impl fmt::Display for HourAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format(&FormatSpec::default()).text())
    }
}

impl fmt::Display for RightAscension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format(&FormatSpec::default()).text())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format(&FormatSpec::default()).text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dms(neg: bool, d: i32, m: i32, s: f64) -> Angle {
        Angle::from_sexagesimal(neg, d, m, s)
    }

    #[test]
    fn test_default_verb_dms() {
        assert_eq!(dms(true, 13, 47, 22.0).format(&FormatSpec::default()).text(), "-13°47′22″");
        assert_eq!(dms(false, 23, 26, 44.0).format(&FormatSpec::default()).text(), "23°26′44″");
    }

    #[test]
    fn test_leading_zero_segment_elision() {
        let a = dms(true, 0, 32, 41.0);
        assert_eq!(a.format(&FormatSpec::default()).text(), "-32′41″");
        assert_eq!(a.format(&FormatSpec::parse("#s")).text(), "-0°32′41″");

        let tiny = dms(false, 0, 0, 7.0);
        assert_eq!(tiny.format(&FormatSpec::default()).text(), "7″");
        assert_eq!(tiny.format(&FormatSpec::parse("#s")).text(), "0°0′7″");
    }

    #[test]
    fn test_seconds_precision() {
        let a = dms(false, 1, 2, 3.25);
        assert_eq!(a.format(&FormatSpec::new('s').precision(2)).text(), "1°2′3.25″");
        let b = dms(false, 1, 2, 3.26);
        assert_eq!(b.format(&FormatSpec::new('s').precision(1)).text(), "1°2′3.3″");
    }

    #[test]
    fn test_fusion_conventions() {
        let a = dms(false, 1, 2, 3.25);
        assert_eq!(a.format(&FormatSpec::new('d').precision(2)).text(), "1°2′3″.25");
        assert_eq!(
            a.format(&FormatSpec::new('c').precision(2)).text(),
            "1°2′3″\u{0323}25"
        );
    }

    #[test]
    fn test_minutes_decimal_verbs() {
        let a = Angle::from_degrees(23.445);
        assert_eq!(a.format(&FormatSpec::new('m').precision(1)).text(), "23°26.7′");
        assert_eq!(a.format(&FormatSpec::new('o').precision(1)).text(), "23°26′.7");
        assert_eq!(
            a.format(&FormatSpec::new('n').precision(1)).text(),
            "23°26′\u{0323}7"
        );
    }

    #[test]
    fn test_first_decimal_verbs() {
        let a = Angle::from_degrees(23.46);
        assert_eq!(a.format(&FormatSpec::new('h').precision(1)).text(), "23.5°");
        assert_eq!(a.format(&FormatSpec::new('j').precision(1)).text(), "23°.5");
        assert_eq!(
            a.format(&FormatSpec::new('i').precision(1)).text(),
            "23°\u{0323}5"
        );
        // Precision 0 leaves nothing to fuse with: all three append.
        assert_eq!(a.format(&FormatSpec::new('j')).text(), "23°");
    }

    #[test]
    fn test_sign_flags() {
        let a = dms(false, 13, 47, 22.0);
        assert_eq!(a.format(&FormatSpec::parse("+s")).text(), "+13°47′22″");
        assert_eq!(a.format(&FormatSpec::parse(" s")).text(), " 13°47′22″");
    }

    #[test]
    fn test_zero_pad_flag() {
        let a = dms(true, 1, 2, 3.0);
        assert_eq!(a.format(&FormatSpec::parse("0s")).text(), "-1°02′03″");
        assert_eq!(a.format(&FormatSpec::parse("02s")).text(), "-01°02′03″");
    }

    #[test]
    fn test_width_space_padding_and_justification() {
        let a = dms(false, 5, 6, 7.0);
        assert_eq!(a.format(&FormatSpec::parse("3s")).text(), "  5°6′07″");
        assert_eq!(a.format(&FormatSpec::parse("-3s")).text(), "5°6′07″  ");
    }

    #[test]
    fn test_width_overflow_is_asterisks_of_zero_width() {
        let a = dms(false, 4423, 26, 44.0);
        let spec = FormatSpec::parse("3s");
        let r = a.format(&spec);
        assert_eq!(r.error(), Some(SexaError::DegreeOverflow));
        assert!(r.text().chars().all(|c| c == '*'));

        let zero = Angle::ZERO.format(&spec);
        assert_eq!(r.text().chars().count(), zero.text().chars().count());
    }

    #[test]
    fn test_hour_overflow_kind() {
        let t = Time::from_seconds(100.0 * 3600.0);
        let r = t.format(&FormatSpec::parse("2s"));
        assert_eq!(r.error(), Some(SexaError::HourOverflow));
    }

    #[test]
    fn test_nan_and_infinities() {
        for (x, e) in [
            (f64::NAN, SexaError::NaN),
            (f64::INFINITY, SexaError::PositiveInfinity),
            (f64::NEG_INFINITY, SexaError::NegativeInfinity),
        ] {
            let r = Angle::from_radians(x).format(&FormatSpec::parse("+#08.3d"));
            assert!(r.text().chars().all(|c| c == '*'), "{e:?}: {:?}", r.text());
            assert_eq!(r.error(), Some(e));
        }
    }

    #[test]
    fn test_precision_loss_routes_to_overflow() {
        let a = Angle::from_degrees(10.0);
        let r = a.format(&FormatSpec::new('s').precision(15));
        assert_eq!(r.error(), Some(SexaError::LossOfPrecision));
        assert!(r.text().starts_with('*'));
    }

    #[test]
    fn test_bad_verb_and_bad_precision_diagnostics() {
        let a = Angle::from_degrees(1.0);
        let r = a.format(&FormatSpec::new('x'));
        assert_eq!(r.text(), "%!x(BADVERB)");
        assert_eq!(r.error(), None);

        let r = a.format(&FormatSpec::new('s').precision(16));
        assert_eq!(r.text(), "%!(BADPREC)");
        assert_eq!(r.error(), None);
    }

    #[test]
    fn test_ra_suppresses_sign_flags() {
        let ra = RightAscension::from_hours(9.5);
        assert_eq!(ra.format(&FormatSpec::parse("+s")).text(), "9ʰ30ᵐ0ˢ");
        assert_eq!(ra.format(&FormatSpec::parse(" s")).text(), "9ʰ30ᵐ0ˢ");
    }

    #[test]
    fn test_time_default_display() {
        let t = Time::from_sexagesimal(true, 1, 30, 0.0);
        assert_eq!(t.to_string(), "-1ʰ30ᵐ0ˢ");
    }

    #[test]
    fn test_ascii_symbols() {
        let a = dms(false, 23, 26, 44.0);
        let ascii = Symbols::ascii();
        assert_eq!(
            a.format_with(&FormatSpec::default(), &ascii).text(),
            "23d26m44s"
        );
    }

    #[test]
    fn test_custom_separator_and_mark() {
        let mut symbols = Symbols::default();
        symbols.decimal_sep = ",".to_string();
        let a = dms(false, 1, 2, 3.25);
        assert_eq!(
            a.format_with(&FormatSpec::new('s').precision(2), &symbols).text(),
            "1°2′3,25″"
        );
        assert_eq!(
            a.format_with(&FormatSpec::new('d').precision(2), &symbols).text(),
            "1°2′3″,25"
        );
    }

    #[test]
    fn test_idempotence() {
        let a = dms(true, 13, 47, 22.0);
        let spec = FormatSpec::parse("+#02.1c");
        let r1 = a.format(&spec);
        let r2 = a.format(&spec);
        assert_eq!(r1, r2);

        let bad = Angle::from_radians(f64::NAN);
        assert_eq!(bad.format(&spec), bad.format(&spec));
    }
}
