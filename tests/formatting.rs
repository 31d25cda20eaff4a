//! End-to-end formatting scenarios: real catalog coordinates rendered
//! through the full pipeline, plus the overflow and round-trip laws.

use celestial_sexa::symbols::{strip_unit, COMBINING_DOT_BELOW};
use celestial_sexa::{Angle, FormatSpec, RightAscension, SexaError, Symbols, Time};

#[test]
fn vega_coordinates_render_like_a_catalog() {
    // Vega: RA 18h 36m 56.3s, Dec +38° 47' 01"
    let ra = RightAscension::from_sexagesimal(18, 36, 56.3);
    let dec = Angle::from_sexagesimal(false, 38, 47, 1.0);

    assert_eq!(ra.format(&FormatSpec::parse(".1s")).text(), "18ʰ36ᵐ56.3ˢ");
    assert_eq!(dec.format(&FormatSpec::parse("+s")).text(), "+38°47′1″");
    assert_eq!(dec.format(&FormatSpec::parse("+0s")).text(), "+38°47′01″");
}

#[test]
fn negative_declination_with_forced_segments() {
    // A declination just south of the equator needs `#` to keep the 0°
    let dec = Angle::from_sexagesimal(true, 0, 32, 41.0);
    assert_eq!(dec.format(&FormatSpec::parse("#s")).text(), "-0°32′41″");
    assert_eq!(dec.format(&FormatSpec::default()).text(), "-32′41″");
}

#[test]
fn sidereal_time_renders_in_hours() {
    let st = Time::from_sexagesimal(false, 15, 22, 7.0);
    assert_eq!(st.format(&FormatSpec::default()).text(), "15ʰ22ᵐ7ˢ");
    assert_eq!(st.format(&FormatSpec::parse("0.2s")).text(), "15ʰ22ᵐ07.00ˢ");
}

#[test]
fn width_overflow_matches_zero_render_width() {
    let wild = Angle::from_sexagesimal(false, 4423, 26, 44.0);
    for spec_str in ["3s", "+03.2d", "2m", "1.1h"] {
        let spec = FormatSpec::parse(spec_str);
        let r = wild.format(&spec);
        assert!(r.is_overflow(), "{spec_str} should overflow");
        assert!(r.text().chars().all(|c| c == '*'));

        let zero = Angle::ZERO.format(&spec);
        assert!(!zero.is_overflow());
        assert_eq!(
            r.text().chars().count(),
            zero.text().chars().count(),
            "asterisk run must match the zero render for {spec_str}"
        );
    }
}

#[test]
fn special_floats_always_overflow_regardless_of_spec() {
    for spec_str in ["s", "c", "j", "+#08.3d", "2n"] {
        let spec = FormatSpec::parse(spec_str);
        for (x, e) in [
            (f64::NAN, SexaError::NaN),
            (f64::INFINITY, SexaError::PositiveInfinity),
            (f64::NEG_INFINITY, SexaError::NegativeInfinity),
        ] {
            let r = Time::from_seconds(x).format(&spec);
            assert_eq!(r.error(), Some(e), "{spec_str}");
            assert!(r.text().chars().all(|c| c == '*'), "{spec_str}");
        }
    }
}

#[test]
fn formatted_decimal_segment_strips_back_to_plain() {
    let symbols = Symbols::default();
    let a = Angle::from_degrees(23.445);

    // Insert convention: 23°26′.7 -> stripping ′ restores 26.7
    let text = a.format(&FormatSpec::new('o').precision(1)).into_text();
    let stripped = strip_unit(&text, symbols.dms.min, &symbols.decimal_sep, COMBINING_DOT_BELOW);
    assert_eq!(stripped, "23°26.7");

    // Combine convention round-trips the same way
    let text = a.format(&FormatSpec::new('n').precision(1)).into_text();
    let stripped = strip_unit(&text, symbols.dms.min, &symbols.decimal_sep, COMBINING_DOT_BELOW);
    assert_eq!(stripped, "23°26.7");
}

#[test]
fn right_ascension_never_negative_never_signed() {
    for h in [-30.0, -1.5, 0.0, 12.0, 23.99, 25.0, 49.0] {
        let ra = RightAscension::from_hours(h);
        assert!(ra.hours() >= 0.0 && ra.hours() < 24.0, "h = {h}");
        let text = ra.format(&FormatSpec::parse("+s")).into_text();
        assert!(!text.starts_with(['+', '-']), "h = {h}: {text}");
    }
}

#[test]
fn determinism_across_repeated_calls() {
    let spec = FormatSpec::parse("+#02.1c");
    let a = Angle::from_sexagesimal(true, 13, 47, 22.0);
    let first = a.format(&spec);
    for _ in 0..3 {
        assert_eq!(a.format(&spec), first);
    }
}
