//! Unit-symbol tables and decimal/unit fusion helpers.
//!
//! Sexagesimal output decorates each segment with a unit symbol. Two
//! canonical tables exist: degree-based (°, ′, ″) for angles and
//! hour-based (ʰ, ᵐ, ˢ) for time-like quantities. Both are swappable for
//! ASCII equivalents, and the decimal separator and combining mark are
//! configurable through [`Symbols`].
//!
//! # Fusion conventions
//!
//! When a segment carries a decimal point, the unit symbol can relate to
//! it in three ways:
//!
//! | Convention | Example (1.25°) | Helper |
//! |------------|-----------------|--------|
//! | Append     | `1.25°`         | plain push |
//! | Insert     | `1°.25`         | [`insert_unit`] |
//! | Combine    | `1°̣25`          | [`combine_unit`] |
//!
//! Combine replaces the decimal separator with the unit symbol followed by
//! U+0323 COMBINING DOT BELOW, rendering the dot underneath the symbol.
//! [`strip_unit`] reverses either transform, restoring the plain decimal
//! string:
//!
//! ```
//! use celestial_sexa::symbols::{combine_unit, insert_unit, strip_unit, COMBINING_DOT_BELOW};
//!
//! let inserted = insert_unit("1.25", '°', ".");
//! assert_eq!(inserted, "1°.25");
//! assert_eq!(strip_unit(&inserted, '°', ".", COMBINING_DOT_BELOW), "1.25");
//!
//! let combined = combine_unit("1.25", '°', ".", COMBINING_DOT_BELOW);
//! assert_eq!(strip_unit(&combined, '°', ".", COMBINING_DOT_BELOW), "1.25");
//! ```

/// U+0323 COMBINING DOT BELOW, the default mark fusing a unit symbol with
/// a decimal point.
pub const COMBINING_DOT_BELOW: char = '\u{0323}';

/// The three unit symbols decorating sexagesimal segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSymbols {
    /// Symbol for the first (most significant) segment: degrees or hours.
    pub first: char,
    /// Symbol for the minutes segment.
    pub min: char,
    /// Symbol for the seconds segment.
    pub sec: char,
}

/// Degree, prime, double prime: the canonical angle table.
pub const DMS_UNITS: UnitSymbols = UnitSymbols {
    first: '°',
    min: '′',
    sec: '″',
};

/// Unicode modifier-letter h, m, s: the canonical time table.
pub const HMS_UNITS: UnitSymbols = UnitSymbols {
    first: 'ʰ',
    min: 'ᵐ',
    sec: 'ˢ',
};

/// ASCII fallback for angles.
pub const DMS_UNITS_ASCII: UnitSymbols = UnitSymbols {
    first: 'd',
    min: 'm',
    sec: 's',
};

/// ASCII fallback for time.
pub const HMS_UNITS_ASCII: UnitSymbols = UnitSymbols {
    first: 'h',
    min: 'm',
    sec: 's',
};

/// Complete symbol configuration for the formatter.
///
/// An explicit value with a `Default` rather than process-wide mutable
/// tables: callers that never customize symbols pay nothing, and tests
/// can run with different tables side by side.
///
/// # Example
///
/// ```
/// use celestial_sexa::{Angle, FormatSpec, Symbols};
///
/// let a = Angle::from_sexagesimal(false, 23, 26, 44.0);
/// let ascii = Symbols::ascii();
/// assert_eq!(a.format_with(&FormatSpec::default(), &ascii).text(), "23d26m44s");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Symbols {
    /// Table for degree-based values ([`Angle`](crate::Angle)).
    pub dms: UnitSymbols,
    /// Table for hour-based values (hour angle, RA, time).
    pub hms: UnitSymbols,
    /// Decimal separator inserted into the decimal-bearing segment.
    pub decimal_sep: String,
    /// Combining mark used by the combine convention.
    pub combine_mark: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            dms: DMS_UNITS,
            hms: HMS_UNITS,
            decimal_sep: ".".to_string(),
            combine_mark: COMBINING_DOT_BELOW,
        }
    }
}

impl Symbols {
    /// Configuration with both tables replaced by their ASCII fallbacks.
    pub fn ascii() -> Self {
        Self {
            dms: DMS_UNITS_ASCII,
            hms: HMS_UNITS_ASCII,
            ..Self::default()
        }
    }
}

/// Inserts `unit` immediately before the first decimal separator, or
/// appends it when the string has no separator.
///
/// `insert_unit("1.25", '°', ".")` is `"1°.25"`; `insert_unit("1", '°', ".")`
/// is `"1°"`.
pub fn insert_unit(decimal: &str, unit: char, sep: &str) -> String {
    let mut s = String::with_capacity(decimal.len() + unit.len_utf8());
    match decimal.find(sep) {
        Some(i) => {
            s.push_str(&decimal[..i]);
            s.push(unit);
            s.push_str(&decimal[i..]);
        }
        None => {
            s.push_str(decimal);
            s.push(unit);
        }
    }
    s
}

/// Replaces the first decimal separator with `unit` followed by the
/// combining mark, so the separator renders underneath the unit symbol.
/// Without a separator this appends the bare unit (there is no decimal
/// point to combine with).
pub fn combine_unit(decimal: &str, unit: char, sep: &str, mark: char) -> String {
    let mut s = String::with_capacity(decimal.len() + unit.len_utf8() + mark.len_utf8());
    match decimal.find(sep) {
        Some(i) => {
            s.push_str(&decimal[..i]);
            s.push(unit);
            s.push(mark);
            s.push_str(&decimal[i + sep.len()..]);
        }
        None => {
            s.push_str(decimal);
            s.push(unit);
        }
    }
    s
}

/// Removes a unit symbol placed by [`insert_unit`] or [`combine_unit`],
/// restoring the plain decimal string.
///
/// Three decorated forms are recognized: unit followed by the separator
/// (inserted), unit followed by the combining mark (combined), and unit at
/// the end of the string (appended, or a whole-number insert/combine).
/// Anything else is returned unchanged.
pub fn strip_unit(decorated: &str, unit: char, sep: &str, mark: char) -> String {
    let Some(i) = decorated.find(unit) else {
        return decorated.to_string();
    };
    let after = &decorated[i + unit.len_utf8()..];

    if after.starts_with(sep) {
        format!("{}{}", &decorated[..i], after)
    } else if after.starts_with(mark) {
        format!("{}{}{}", &decorated[..i], sep, &after[mark.len_utf8()..])
    } else if after.is_empty() {
        decorated[..i].to_string()
    } else {
        decorated.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DECIMALS: [&str; 4] = ["1.25", "1.", "1", ".25"];
    const UNITS: [char; 4] = ['°', '"', 'h', 'ʰ'];

    #[test]
    fn test_insert_round_trip() {
        for d in DECIMALS {
            for u in UNITS {
                let decorated = insert_unit(d, u, ".");
                assert_eq!(
                    strip_unit(&decorated, u, ".", COMBINING_DOT_BELOW),
                    d,
                    "insert round trip failed for {d:?} with {u:?}"
                );
            }
        }
    }

    #[test]
    fn test_combine_round_trip() {
        for d in DECIMALS {
            for u in UNITS {
                let decorated = combine_unit(d, u, ".", COMBINING_DOT_BELOW);
                assert_eq!(
                    strip_unit(&decorated, u, ".", COMBINING_DOT_BELOW),
                    d,
                    "combine round trip failed for {d:?} with {u:?}"
                );
            }
        }
    }

    #[test]
    fn test_insert_placement() {
        assert_eq!(insert_unit("1.25", '°', "."), "1°.25");
        assert_eq!(insert_unit("1", '°', "."), "1°");
        assert_eq!(insert_unit(".25", 'ʰ', "."), "ʰ.25");
    }

    #[test]
    fn test_combine_placement() {
        assert_eq!(
            combine_unit("1.25", '°', ".", COMBINING_DOT_BELOW),
            "1°\u{0323}25"
        );
        // No separator: bare append, no combining mark
        assert_eq!(combine_unit("1", '°', ".", COMBINING_DOT_BELOW), "1°");
    }

    #[test]
    fn test_strip_is_noop_on_unexpected_input() {
        // Unit followed by a plain digit matches no decorated form.
        assert_eq!(strip_unit("1°25", '°', ".", COMBINING_DOT_BELOW), "1°25");
        // No unit at all.
        assert_eq!(strip_unit("1.25", '°', ".", COMBINING_DOT_BELOW), "1.25");
    }

    #[test]
    fn test_custom_separator() {
        let decorated = insert_unit("1,25", '°', ",");
        assert_eq!(decorated, "1°,25");
        assert_eq!(strip_unit(&decorated, '°', ",", COMBINING_DOT_BELOW), "1,25");
    }

    #[test]
    fn test_symbol_tables() {
        assert_eq!(Symbols::default().dms, DMS_UNITS);
        assert_eq!(Symbols::ascii().hms, HMS_UNITS_ASCII);
        assert_eq!(Symbols::default().decimal_sep, ".");
    }

    proptest! {
        #[test]
        fn prop_round_trip(int in 0u32..10_000, frac in proptest::option::of(0u32..10_000)) {
            let d = match frac {
                Some(f) => format!("{int}.{f}"),
                None => int.to_string(),
            };
            for u in UNITS {
                let ins = insert_unit(&d, u, ".");
                prop_assert_eq!(strip_unit(&ins, u, ".", COMBINING_DOT_BELOW), d.clone());
                let com = combine_unit(&d, u, ".", COMBINING_DOT_BELOW);
                prop_assert_eq!(strip_unit(&com, u, ".", COMBINING_DOT_BELOW), d.clone());
            }
        }
    }
}
