use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SymbologyTypesError;
use crate::geo::traits::{GeoPoint, NewGeoPoint};

/// Geographic position: latitude and longitude in degrees and elevation in meters.
///
/// How the elevation is interpreted depends on the [`AltitudeMode`](crate::AltitudeMode) of the object placed at
/// the position.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    lat: f64,
    lon: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    elevation: f64,
}

impl GeoPosition {
    /// Creates a position from latitude, longitude (degrees) and elevation (meters) without any checks.
    pub const fn from_degrees(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            lat,
            lon,
            elevation,
        }
    }

    /// Creates a position, returning an error if any of the components is NaN or infinite.
    pub fn try_new(lat: f64, lon: f64, elevation: f64) -> Result<Self, SymbologyTypesError> {
        let position = Self::from_degrees(lat, lon, elevation);
        if position.is_finite() {
            Ok(position)
        } else {
            Err(SymbologyTypesError::InvalidPosition(format!(
                "({lat}, {lon}, {elevation}) has non-finite components"
            )))
        }
    }

    /// Elevation in meters.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Returns a copy of the position with the given elevation.
    pub fn with_elevation(&self, elevation: f64) -> Self {
        Self { elevation, ..*self }
    }

    /// Returns true if all components are finite numbers, i.e. the position describes an actual location.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.elevation.is_finite()
    }
}

impl GeoPoint for GeoPosition {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPosition {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::from_degrees(lat, lon, 0.0)
    }
}

impl AbsDiffEq for GeoPosition {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon)
            && self.lon.abs_diff_eq(&other.lon, epsilon)
            && self.elevation.abs_diff_eq(&other.elevation, epsilon)
    }
}

/// Creates a new [`GeoPosition`] from latitude, longitude (degrees) and elevation (meters).
///
/// ```
/// use symbology_types::geo::GeoPoint;
/// use symbology_types::latlonh;
///
/// let position = latlonh!(40.0, -120.0, 150.0);
/// assert_eq!(position.lat(), 40.0);
/// assert_eq!(position.elevation(), 150.0);
/// ```
#[macro_export]
macro_rules! latlonh {
    ($lat:expr, $lon:expr, $elevation:expr) => {
        $crate::geo::GeoPosition::from_degrees($lat, $lon, $elevation)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(GeoPosition::try_new(40.0, -120.0, 0.0).is_ok());
        assert!(GeoPosition::try_new(f64::NAN, -120.0, 0.0).is_err());
        assert!(GeoPosition::try_new(40.0, f64::INFINITY, 0.0).is_err());
        assert!(GeoPosition::try_new(40.0, -120.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn radians() {
        let position = GeoPosition::latlon(90.0, -180.0);
        assert_abs_diff_eq!(position.lat_rad(), std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(position.lon_rad(), -std::f64::consts::PI);
        assert_eq!(position.elevation(), 0.0);
    }

    #[test]
    fn with_elevation_keeps_lat_lon() {
        let position = latlonh!(40.0, -120.0, 0.0).with_elevation(250.0);
        assert_eq!(position, GeoPosition::from_degrees(40.0, -120.0, 250.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn elevation_defaults_to_zero_when_missing() {
        let position: GeoPosition =
            serde_json::from_str(r#"{"lat": 40.0, "lon": -120.0}"#).expect("invalid json");
        assert_eq!(position, GeoPosition::from_degrees(40.0, -120.0, 0.0));
    }
}
