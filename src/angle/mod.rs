//! Sexagesimal value types: [`Angle`], [`HourAngle`], [`RightAscension`],
//! and [`Time`], with normalization helpers and arithmetic.

mod core;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::{Angle, HourAngle, RightAscension, Time};
pub use normalize::{wrap_0_2pi, wrap_pm_pi};

pub use self::core::{deg, hours, rad};
