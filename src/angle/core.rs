//! The four sexagesimal value types.
//!
//! All four wrap a single f64 but are distinct types, so adding a
//! [`Time`] to an [`Angle`] without an explicit conversion is a compile
//! error rather than a unit bug:
//!
//! | Type | Unit | Range | Sign |
//! |------|------|-------|------|
//! | [`Angle`] | radians | unconstrained | allowed |
//! | [`HourAngle`] | radians (1h = 15°) | unconstrained | allowed |
//! | [`RightAscension`] | radians | always [0, 2pi) | never |
//! | [`Time`] | seconds | unconstrained | allowed (signed duration) |
//!
//! # Sexagesimal construction
//!
//! Each type is constructible from signed degree/hour, minute, second
//! components. Components are inputs to a sum, not validated fields:
//! 90 minutes folds arithmetically into 1.5 first-segment units.
//!
//! ```
//! use celestial_sexa::Angle;
//!
//! let a = Angle::from_sexagesimal(false, 23, 26, 44.0);
//! assert!((a.degrees() - 23.445556).abs() < 1e-6);
//!
//! // Out-of-range components fold rather than error
//! let folded = Angle::from_sexagesimal(false, 0, 90, 0.0);
//! assert!((folded.degrees() - 1.5).abs() < 1e-12);
//! ```
//!
//! # Right ascension normalization
//!
//! [`RightAscension`] wraps into [0, 2pi) on every construction path:
//!
//! ```
//! use celestial_sexa::RightAscension;
//!
//! let ra = RightAscension::from_hours(-1.5);
//! assert!((ra.hours() - 22.5).abs() < 1e-10);
//! ```

use crate::constants::{DEGREES_PER_HOUR, SECONDS_PER_DAY_F64, SECONDS_PER_UNIT, TWOPI};

use super::normalize::{wrap_0_2pi, wrap_pm_pi};

/// Sums signed sexagesimal components into first-segment units.
#[inline]
fn sexa_sum(neg: bool, major: i32, minor: i32, seconds: f64) -> f64 {
    let units = ((f64::from(major) * 60.0 + f64::from(minor)) * 60.0 + seconds) / SECONDS_PER_UNIT;
    if neg {
        -units
    } else {
        units
    }
}

/// A general angle stored as radians.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Creates an angle from radians. The only `const` constructor,
    /// because radians are the internal representation.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from arcseconds (1/3600 of a degree).
    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self::from_degrees(arcsec / SECONDS_PER_UNIT)
    }

    /// Creates an angle from signed degree, arcminute, arcsecond
    /// components.
    ///
    /// The sign is a separate flag so that `-0° 32′ 41″` is expressible:
    /// negating the degree component alone would lose the sign when the
    /// degrees are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use celestial_sexa::Angle;
    ///
    /// let a = Angle::from_sexagesimal(true, 13, 47, 22.0);
    /// assert!((a.degrees() + 13.789444444444445).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_sexagesimal(neg: bool, deg: i32, min: i32, sec: f64) -> Self {
        Self::from_degrees(sexa_sum(neg, deg, min, sec))
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the angle in arcminutes.
    #[inline]
    pub fn arcminutes(self) -> f64 {
        self.degrees() * 60.0
    }

    /// Returns the angle in arcseconds.
    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.degrees() * SECONDS_PER_UNIT
    }

    /// Returns the angle in hours (24h = 360°).
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    /// Wraps the angle to [0, 2pi).
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_radians(wrap_0_2pi(self.rad))
    }

    /// Wraps the angle to [-pi, +pi).
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(wrap_pm_pi(self.rad))
    }
}

/// An hour angle stored as radians, displayed in hours of time.
///
/// Structurally identical to [`Angle`] but formatted with the hour-based
/// symbol table, and distinct in the type system so that earth-rotation
/// quantities do not mix silently with general angles.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct HourAngle {
    rad: f64,
}

impl HourAngle {
    /// Zero hour angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Creates an hour angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an hour angle from hours of time (1h = 15°).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * DEGREES_PER_HOUR).to_radians(),
        }
    }

    /// Creates an hour angle from signed hour, minute, second components.
    #[inline]
    pub fn from_sexagesimal(neg: bool, hour: i32, min: i32, sec: f64) -> Self {
        Self::from_hours(sexa_sum(neg, hour, min, sec))
    }

    /// Returns the hour angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the hour angle in hours of time.
    #[inline]
    pub fn hours(self) -> f64 {
        self.rad.to_degrees() / DEGREES_PER_HOUR
    }

    /// Returns the hour angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the hour angle in minutes of time.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.hours() * 60.0
    }

    /// Returns the hour angle in seconds of time.
    #[inline]
    pub fn seconds(self) -> f64 {
        self.hours() * SECONDS_PER_UNIT
    }

    /// Wraps to [-pi, +pi), the conventional hour-angle range
    /// (negative east of the meridian, positive west).
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(wrap_pm_pi(self.rad))
    }
}

/// A right ascension stored as radians, always in [0, 2pi).
///
/// Every construction path normalizes, so the invariant cannot be
/// violated from outside this module. There is no negative construction
/// and no sign in formatted output.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct RightAscension {
    rad: f64,
}

impl RightAscension {
    /// Zero right ascension.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Creates a right ascension from radians, wrapping into [0, 2pi).
    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        Self {
            rad: wrap_0_2pi(rad),
        }
    }

    /// Creates a right ascension from hours, wrapping into [0, 24h).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::from_radians((h * DEGREES_PER_HOUR).to_radians())
    }

    /// Creates a right ascension from degrees, wrapping into [0, 360°).
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_radians(deg.to_radians())
    }

    /// Creates a right ascension from hour, minute, second components.
    ///
    /// No sign flag: negative sexagesimal components are not meaningful
    /// for right ascension. The result wraps into [0, 24h).
    #[inline]
    pub fn from_sexagesimal(hour: i32, min: i32, sec: f64) -> Self {
        Self::from_hours(sexa_sum(false, hour, min, sec))
    }

    /// Returns the right ascension in radians, in [0, 2pi).
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the right ascension in hours, in [0, 24).
    #[inline]
    pub fn hours(self) -> f64 {
        self.rad.to_degrees() / DEGREES_PER_HOUR
    }

    /// Returns the right ascension in degrees, in [0, 360).
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }
}

/// A signed duration stored as seconds.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time {
    sec: f64,
}

impl Time {
    /// Zero duration.
    pub const ZERO: Self = Self { sec: 0.0 };

    /// Creates a time from seconds.
    #[inline]
    pub const fn from_seconds(sec: f64) -> Self {
        Self { sec }
    }

    /// Creates a time from days.
    #[inline]
    pub fn from_days(d: f64) -> Self {
        Self {
            sec: d * SECONDS_PER_DAY_F64,
        }
    }

    /// Creates a time from signed hour, minute, second components.
    ///
    /// # Example
    ///
    /// ```
    /// use celestial_sexa::Time;
    ///
    /// let t = Time::from_sexagesimal(true, 1, 30, 0.0);
    /// assert_eq!(t.seconds(), -5400.0);
    /// ```
    #[inline]
    pub fn from_sexagesimal(neg: bool, hour: i32, min: i32, sec: f64) -> Self {
        // Seconds are the native unit, so the component sum is taken
        // directly instead of through first-segment units and back.
        let s = (f64::from(hour) * 60.0 + f64::from(min)) * 60.0 + sec;
        Self::from_seconds(if neg { -s } else { s })
    }

    /// Returns the duration in seconds.
    #[inline]
    pub fn seconds(self) -> f64 {
        self.sec
    }

    /// Returns the duration in minutes.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.sec / 60.0
    }

    /// Returns the duration in hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.sec / SECONDS_PER_UNIT
    }

    /// Returns the duration in days.
    #[inline]
    pub fn days(self) -> f64 {
        self.sec / SECONDS_PER_DAY_F64
    }

    /// Returns the duration as an earth-rotation angle in radians
    /// (one day = 2pi).
    #[inline]
    pub fn radians(self) -> f64 {
        self.sec / SECONDS_PER_DAY_F64 * TWOPI
    }
}

impl From<HourAngle> for Angle {
    #[inline]
    fn from(h: HourAngle) -> Self {
        Angle::from_radians(h.radians())
    }
}

impl From<Angle> for HourAngle {
    #[inline]
    fn from(a: Angle) -> Self {
        HourAngle::from_radians(a.radians())
    }
}

impl From<RightAscension> for Angle {
    #[inline]
    fn from(ra: RightAscension) -> Self {
        Angle::from_radians(ra.radians())
    }
}

impl From<RightAscension> for HourAngle {
    #[inline]
    fn from(ra: RightAscension) -> Self {
        HourAngle::from_radians(ra.radians())
    }
}

impl From<Time> for HourAngle {
    #[inline]
    fn from(t: Time) -> Self {
        HourAngle::from_radians(t.radians())
    }
}

/// Creates an [`Angle`] from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Creates an [`Angle`] from degrees. Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Creates an [`HourAngle`] from hours. Shorthand for [`HourAngle::from_hours`].
#[inline]
pub fn hours(v: f64) -> HourAngle {
    HourAngle::from_hours(v)
}
