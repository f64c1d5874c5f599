//! Geographic coordinate type and geodesic distance.
//!
//! `GeoPoint` stores longitude/latitude as `f64` decimal degrees in GeoJSON
//! axis order (longitude first).  Double precision keeps the haversine
//! bit-exact under argument swap, which the ranking pipeline relies on.

use crate::DistanceUnit;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// A geographic coordinate in decimal degrees, longitude first.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric by construction: every term is squared or a commutative
    /// product, so `a.distance_km(b)` and `b.distance_km(a)` are
    /// bit-identical.  Returns exactly 0 for coordinate-equal points.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Great-circle distance converted to `unit`.
    #[inline]
    pub fn distance_in(self, other: GeoPoint, unit: DistanceUnit) -> f64 {
        unit.from_km(self.distance_km(other))
    }

    /// Coordinate equality within `eps` degrees on both axes.
    ///
    /// `GeoPoint` has no epsilon-aware `PartialEq`; tests compare through
    /// this helper instead.
    #[inline]
    pub fn approx_eq(self, other: GeoPoint, eps: f64) -> bool {
        (self.lon - other.lon).abs() <= eps && (self.lat - other.lat).abs() <= eps
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
