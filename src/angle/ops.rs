//! Arithmetic operators for the sexagesimal value types.
//!
//! Same-type `+`, `-`, unary `-`, and scalar `*`/`/` only. Mixing types
//! requires an explicit conversion first, which is the point.

use core::ops::*;

use super::core::{Angle, HourAngle, RightAscension, Time};

macro_rules! scalar_ops {
    ($ty:ident, $ctor:ident, $get:ident) => {
        impl Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $ty::$ctor(self.$get() + rhs.$get())
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $ty::$ctor(self.$get() - rhs.$get())
            }
        }

        impl Mul<f64> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, k: f64) -> Self {
                $ty::$ctor(self.$get() * k)
            }
        }

        impl Div<f64> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, k: f64) -> Self {
                $ty::$ctor(self.$get() / k)
            }
        }

        impl Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> Self {
                $ty::$ctor(-self.$get())
            }
        }
    };
}

scalar_ops!(Angle, from_radians, radians);
scalar_ops!(HourAngle, from_radians, radians);
scalar_ops!(Time, from_seconds, seconds);

/// RightAscension + HourAngle → RightAscension, wrapped into [0, 2pi).
impl Add<HourAngle> for RightAscension {
    type Output = RightAscension;
    #[inline]
    fn add(self, rhs: HourAngle) -> RightAscension {
        RightAscension::from_radians(self.radians() + rhs.radians())
    }
}

/// RightAscension - RightAscension → HourAngle (the separation in time,
/// signed, not wrapped).
impl Sub for RightAscension {
    type Output = HourAngle;
    #[inline]
    fn sub(self, rhs: Self) -> HourAngle {
        HourAngle::from_radians(self.radians() - rhs.radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_add_sub() {
        let a = Angle::from_radians(1.0);
        let b = Angle::from_radians(0.5);
        assert_eq!((a + b).radians(), 1.5);
        assert_eq!((a - b).radians(), 0.5);
    }

    #[test]
    fn test_scalar_mul_div() {
        let t = Time::from_seconds(30.0);
        assert_eq!((t * 2.0).seconds(), 60.0);
        assert_eq!((t / 2.0).seconds(), 15.0);
    }

    #[test]
    fn test_neg() {
        let h = HourAngle::from_hours(3.0);
        assert_relative_eq!((-h).hours(), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ra_plus_hour_angle_wraps() {
        let ra = RightAscension::from_hours(23.0);
        let shifted = ra + HourAngle::from_hours(2.0);
        assert_relative_eq!(shifted.hours(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_ra_separation_is_signed() {
        let a = RightAscension::from_hours(3.0);
        let b = RightAscension::from_hours(5.0);
        assert_relative_eq!((a - b).hours(), -2.0, epsilon = 1e-10);
    }
}
