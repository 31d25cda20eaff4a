use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::core::{Angle, HourAngle, RightAscension, Time};

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.radians())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = f64::deserialize(d)?;
        Ok(Angle::from_radians(r))
    }
}

impl Serialize for HourAngle {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.radians())
    }
}

impl<'de> Deserialize<'de> for HourAngle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = f64::deserialize(d)?;
        Ok(HourAngle::from_radians(r))
    }
}

impl Serialize for RightAscension {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.radians())
    }
}

impl<'de> Deserialize<'de> for RightAscension {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = f64::deserialize(d)?;
        // Construction wraps, preserving the [0, 2pi) invariant even for
        // out-of-range persisted values.
        Ok(RightAscension::from_radians(r))
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.seconds())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let sec = f64::deserialize(d)?;
        Ok(Time::from_seconds(sec))
    }
}
