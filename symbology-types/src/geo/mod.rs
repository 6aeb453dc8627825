//! Points in geographic coordinates (latitude, longitude and elevation).

mod position;
mod traits;

pub use position::GeoPosition;
pub use traits::{GeoPoint, NewGeoPoint};
