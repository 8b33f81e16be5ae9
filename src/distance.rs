//! Great-circle distance between two coordinates.

use haversine::{distance, Location as HaversineLocation, Units};

/// Haversine distance in kilometers between `(lat1, lon1)` and `(lat2, lon2)`,
/// using a mean Earth radius of 6371 km.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    distance(
        HaversineLocation {
            latitude: lat1,
            longitude: lon1,
        },
        HaversineLocation {
            latitude: lat2,
            longitude: lon2,
        },
        Units::Kilometers,
    )
}

/// Rounds a raw distance up to whole kilometers.
pub fn distance_km_ceil(raw_km: f64) -> u32 {
    raw_km.ceil() as u32
}
