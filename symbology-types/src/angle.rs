//! [`Angle`] is a direction or rotation value, used for headings and directions of movement.

use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Angle stored in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Angle = Angle::from_degrees(0.0);

    /// Creates an angle from degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Creates an angle from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    /// Value in degrees.
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Value in radians.
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    /// Returns the same direction expressed in `[0, 360)` degrees.
    pub fn normalized(&self) -> Self {
        Self {
            degrees: self.degrees.rem_euclid(360.0),
        }
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.degrees.abs_diff_eq(&other.degrees, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalization() {
        assert_abs_diff_eq!(Angle::from_degrees(-90.0).normalized().degrees(), 270.0);
        assert_abs_diff_eq!(Angle::from_degrees(720.0).normalized().degrees(), 0.0);
        assert_abs_diff_eq!(Angle::from_degrees(45.0).normalized().degrees(), 45.0);
    }

    #[test]
    fn radians_and_degrees() {
        let angle = Angle::from_radians(std::f64::consts::PI);
        assert_abs_diff_eq!(angle.degrees(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Angle::from_degrees(90.0).radians(), std::f64::consts::FRAC_PI_2);
    }
}
