use crate::domain::Distance;

/// Mean Earth radius used for all great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64, // In meters
}

impl GeoLocation {
    #[cfg(test)]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    /// Returns the great-circle distance to `other`, ignoring altitude.
    pub fn distance_to(&self, other: &GeoLocation) -> Distance {
        Distance::from_meters(haversine(self.latitude, self.longitude, other.latitude, other.longitude))
    }
}

/// Returns the great-circle distance in meters between two points given in decimal degrees,
/// using the haversine formula on a sphere with radius [`EARTH_RADIUS_M`].
/// See https://en.wikipedia.org/wiki/Haversine_formula.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (lat1.to_radians(), lon1.to_radians(), lat2.to_radians(), lon2.to_radians());

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` just past 1 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    c * EARTH_RADIUS_M
}
