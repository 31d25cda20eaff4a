//! The format-specifier mini-language: verbs, flags, width, precision.
//!
//! A specifier selects which segment carries the decimal point, how the
//! unit symbol relates to that decimal point, and the usual printf-style
//! flags. The verb alphabet:
//!
//! | Verb | Decimal segment | Unit convention | Example (23°26′44″) |
//! |------|-----------------|-----------------|---------------------|
//! | `s` / `v` | seconds | append | `23°26′44.0″` |
//! | `c` | seconds | combine | `23°26′44″̣0` |
//! | `d` | seconds | insert | `23°26′44″.0` |
//! | `m` | minutes | append | `23°26.7′` |
//! | `n` | minutes | combine | `23°26′̣7` |
//! | `o` | minutes | insert | `23°26′.7` |
//! | `h` | first | append | `23.4°` |
//! | `i` | first | combine | `23°̣4` |
//! | `j` | first | insert | `23°.4` |
//!
//! Flags: `+` force sign, ` ` space for elided sign, `#` force all
//! segments, `0` zero-pad, `-` left-justify (with width). Width is the
//! minimum digit count of the *first* segment, not the total string
//! width. Precision (0–15, default 0) is the digit count after the
//! decimal point.
//!
//! # String grammar
//!
//! [`FormatSpec::parse`] accepts `[%][flags][width][.precision]verb`:
//!
//! ```
//! use celestial_sexa::FormatSpec;
//!
//! let spec = FormatSpec::parse("+02.3s");
//! assert!(spec.plus && spec.zero);
//! assert_eq!(spec.width, Some(2));
//! assert_eq!(spec.precision, 3);
//! ```
//!
//! Parsing never fails: an unrecognized verb or out-of-range precision is
//! carried through and reported by the formatter as an inline diagnostic
//! (`%!x(BADVERB)`, `%!(BADPREC)`), matching the treatment of a malformed
//! format string as a programmer error rather than a data error.

/// Which sexagesimal segment carries the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// The most significant segment (degrees or hours).
    First,
    /// The minutes segment; no seconds segment is emitted.
    Minutes,
    /// The seconds segment (the common case).
    Seconds,
}

/// How the decimal-bearing segment's unit symbol relates to the decimal
/// point. See [`crate::symbols`] for the transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fusion {
    /// Unit symbol after the full decimal string.
    Append,
    /// Unit symbol replaces the separator, combining mark underneath.
    Combine,
    /// Unit symbol immediately before the separator.
    Insert,
}

/// A recognized (segment, fusion) pair, resolved once from the verb
/// character at the start of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb {
    pub segment: Segment,
    pub fusion: Fusion,
}

impl Verb {
    /// Resolves a verb character, or `None` for an unrecognized verb.
    ///
    /// `v` is the default and an alias of `s`.
    pub fn from_char(c: char) -> Option<Self> {
        let (segment, fusion) = match c {
            's' | 'v' => (Segment::Seconds, Fusion::Append),
            'c' => (Segment::Seconds, Fusion::Combine),
            'd' => (Segment::Seconds, Fusion::Insert),
            'm' => (Segment::Minutes, Fusion::Append),
            'n' => (Segment::Minutes, Fusion::Combine),
            'o' => (Segment::Minutes, Fusion::Insert),
            'h' => (Segment::First, Fusion::Append),
            'i' => (Segment::First, Fusion::Combine),
            'j' => (Segment::First, Fusion::Insert),
            _ => return None,
        };
        Some(Self { segment, fusion })
    }
}

/// A complete format specifier, constructed fresh per format call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    /// Raw verb character; validated by the formatter (stage 1).
    pub verb: char,
    /// Fractional digits in the decimal-bearing segment, 0..=15.
    /// Out-of-range values are a specification error (stage 2).
    pub precision: u8,
    /// Minimum digit count of the first segment.
    pub width: Option<usize>,
    /// `+`: show the sign even when positive.
    pub plus: bool,
    /// ` `: emit a space where the elided `+` would go.
    pub space: bool,
    /// `#`: show leading zero segments instead of eliding them.
    pub hash: bool,
    /// `0`: zero-pad minute/second integers to two digits, and the first
    /// segment to `width` when a width is given.
    pub zero: bool,
    /// `-`: move first-segment space padding to the end of the string.
    pub minus: bool,
}

impl Default for FormatSpec {
    /// Seconds-decimal, append convention, precision 0, no width, no
    /// flags — the `v` verb.
    fn default() -> Self {
        Self::new('v')
    }
}

impl FormatSpec {
    /// Specifier with the given verb and all other fields at defaults.
    pub fn new(verb: char) -> Self {
        Self {
            verb,
            precision: 0,
            width: None,
            plus: false,
            space: false,
            hash: false,
            zero: false,
            minus: false,
        }
    }

    /// Sets the fractional digit count.
    pub fn precision(mut self, p: u8) -> Self {
        self.precision = p;
        self
    }

    /// Sets the minimum first-segment digit count.
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }

    /// Forces an explicit `+` on non-negative values.
    pub fn force_sign(mut self) -> Self {
        self.plus = true;
        self
    }

    /// Emits a space where an elided sign would go.
    pub fn space_sign(mut self) -> Self {
        self.space = true;
        self
    }

    /// Shows leading zero segments instead of eliding them.
    pub fn all_segments(mut self) -> Self {
        self.hash = true;
        self
    }

    /// Zero-pads segment integers.
    pub fn zero_pad(mut self) -> Self {
        self.zero = true;
        self
    }

    /// Moves first-segment space padding to the end of the string.
    pub fn left_justify(mut self) -> Self {
        self.minus = true;
        self
    }

    /// Parses `[%][flags][width][.precision]verb`.
    ///
    /// Never fails; see the module docs. A missing verb, or trailing
    /// characters after the verb, yield an unrecognized verb that the
    /// formatter diagnoses inline.
    pub fn parse(s: &str) -> Self {
        let s = s.strip_prefix('%').unwrap_or(s);
        let mut spec = Self::new('\u{0}');
        let mut chars = s.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '#' => spec.hash = true,
                '0' => spec.zero = true,
                '-' => spec.minus = true,
                _ => break,
            }
            chars.next();
        }

        let mut width: Option<usize> = None;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            width = Some(width.unwrap_or(0).saturating_mul(10) + d as usize);
            chars.next();
        }
        spec.width = width;

        if chars.peek() == Some(&'.') {
            chars.next();
            let mut prec: u8 = 0;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                prec = prec.saturating_mul(10).saturating_add(d as u8);
                chars.next();
            }
            spec.precision = prec;
        }

        if let Some(v) = chars.next() {
            // Trailing garbage after the verb invalidates it.
            if chars.next().is_none() {
                spec.verb = v;
            }
        }

        spec
    }
}
