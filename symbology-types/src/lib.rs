//! Value types shared by the symbology crates: geographic positions, angles and altitude modes.
//!
//! These types know nothing about rendering. They describe *where* a symbol is and how its elevation
//! should be interpreted, and leave everything else to the `symbology` crate.

pub mod altitude;
pub mod angle;
pub mod error;
pub mod geo;

pub use altitude::AltitudeMode;
pub use angle::Angle;
pub use geo::{GeoPoint, GeoPosition, NewGeoPoint};
