//! Angle wrapping for cyclic astronomical quantities.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension | [0, 2pi) | [`wrap_0_2pi`] |
//! | Hour angle | [-pi, +pi) | [`wrap_pm_pi`] |
//!
//! Right ascension is conventionally non-negative with its discontinuity
//! at 0h/24h; hour angle is centered on the meridian with the
//! discontinuity at the anti-meridian. Both use `libm::fmod` (via
//! [`crate::math::fmod`]) because Rust's `%` is a remainder that keeps the
//! dividend's sign, which needs a post-adjustment either way.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle in radians to [0, 2pi).
///
/// This is the normalization behind the
/// [`RightAscension`](crate::RightAscension) range invariant.
///
/// # Examples
///
/// ```
/// use celestial_sexa::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0); // -90 deg -> 270 deg
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
///
/// let y = wrap_0_2pi(5.0 * PI); // 900 deg -> 180 deg
/// assert!((y - PI).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps an angle in radians to [-pi, +pi).
///
/// # Examples
///
/// ```
/// use celestial_sexa::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_pm_pi(3.0 * PI / 2.0); // 270 deg -> -90 deg
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_0_2pi() {
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        assert!((wrap_0_2pi(-PI / 2.0) - (3.0 * PI / 2.0)).abs() < 1e-15);
        assert!((wrap_0_2pi(3.0 * PI) - PI).abs() < 1e-15);
        assert!(wrap_0_2pi(TWOPI).abs() < 1e-15);
    }

    #[test]
    fn test_wrap_pm_pi() {
        assert_eq!(wrap_pm_pi(1.0), 1.0);
        assert!((wrap_pm_pi(3.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-15);
        assert!((wrap_pm_pi(-3.0 * PI / 2.0) - (PI / 2.0)).abs() < 1e-15);
        assert!((wrap_pm_pi(PI) - (-PI)).abs() < 1e-15);
    }
}
