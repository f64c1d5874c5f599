//! Axis-aligned bounding envelope over a point set.

use prox_core::GeoPoint;

use crate::{GeomError, GeomResult, Ring};

/// Minimal axis-aligned rectangle over a point set, as a four-corner closed
/// ring plus its geodesic perimeter length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingEnvelope {
    pub ring: Ring,
    pub perimeter_km: f64,
}

impl BoundingEnvelope {
    /// Envelope over all `points`.
    ///
    /// The corner order is (W,S) → (E,S) → (E,N) → (W,N), closed; the
    /// perimeter sums the haversine length of the four edges.  Fails with
    /// [`GeomError::EmptyInput`] when `points` yields nothing.
    pub fn of_points<I>(points: I) -> GeomResult<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut min_lon = f64::INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut seen = false;

        for p in points {
            seen = true;
            min_lon = min_lon.min(p.lon);
            min_lat = min_lat.min(p.lat);
            max_lon = max_lon.max(p.lon);
            max_lat = max_lat.max(p.lat);
        }
        if !seen {
            return Err(GeomError::EmptyInput);
        }

        let sw = GeoPoint::new(min_lon, min_lat);
        let se = GeoPoint::new(max_lon, min_lat);
        let ne = GeoPoint::new(max_lon, max_lat);
        let nw = GeoPoint::new(min_lon, max_lat);

        let perimeter_km = sw.distance_km(se)
            + se.distance_km(ne)
            + ne.distance_km(nw)
            + nw.distance_km(sw);

        Ok(Self {
            ring: Ring::new(vec![sw, se, ne, nw, sw]),
            perimeter_km,
        })
    }
}
