//! Geodesy primitives for the Sedayu Sehat facility navigator.
//!
//! This crate provides:
//! - The `Coordinate` value type shared across the workspace
//! - Haversine great-circle distance calculation
//!
//! # Example
//!
//! ```
//! use sehat_geo::{haversine_distance, Coordinate};
//!
//! let center = Coordinate::new(-7.8014, 110.3647);    // Yogyakarta city center
//! let tegalrejo = Coordinate::new(-7.7725, 110.3589); // Puskesmas Tegalrejo
//!
//! let distance_km = haversine_distance(&center, &tegalrejo);
//! assert!((distance_km - 3.27).abs() < 0.1);
//! ```

mod haversine;

pub use haversine::{haversine_distance, EARTH_RADIUS_KM};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(-7.8014, 110.3647);
        assert_eq!(coord.latitude, -7.8014);
        assert_eq!(coord.longitude, 110.3647);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (-7.8014, 110.3647).into();
        assert_eq!(coord.latitude, -7.8014);
    }
}
