//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two
//! points on a sphere given their longitudes and latitudes. Inputs are taken
//! as-is: callers supply device-reported or catalog coordinates, so no range
//! validation is performed here.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Pure and deterministic, with no failure modes. The result carries full
/// floating-point precision; rounding for display is the caller's concern.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers
///
/// # Example
/// ```
/// use sehat_geo::{haversine_distance, Coordinate};
///
/// let kraton = Coordinate::new(-7.8052, 110.3642);
/// let tugu = Coordinate::new(-7.7828, 110.3671);
///
/// let distance = haversine_distance(&kraton, &tugu);
/// assert!(distance > 2.0 && distance < 3.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
