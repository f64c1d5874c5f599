//! Geodesic disc approximation.
//!
//! A disc buffer is generated by projecting equally spaced bearings outward
//! from the center with the spherical destination-point formula and
//! connecting the resulting vertices into a closed ring.  In lon/lat space
//! the ring is slightly elliptical away from the equator (longitude
//! stretches by 1/cos(lat)), which is exactly what a fixed-radius geodesic
//! disc looks like in that projection.

use std::f64::consts::TAU;

use prox_core::{EARTH_RADIUS_KM, GeoPoint};

use crate::{GeomError, GeomResult, Ring};

/// Project `origin` along `bearing_rad` (clockwise from north) by
/// `distance_km` on a spherical Earth.
pub fn destination(origin: GeoPoint, bearing_rad: f64, distance_km: f64) -> GeoPoint {
    let ang = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let lat2 = (lat1.sin() * ang.cos() + lat1.cos() * ang.sin() * bearing_rad.cos()).asin();
    let lon2 = lon1
        + (bearing_rad.sin() * ang.sin() * lat1.cos())
            .atan2(ang.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lon2.to_degrees(), lat2.to_degrees())
}

/// Closed ring of `segments` vertices approximating a geodesic disc of
/// `radius_km` around `center`.
///
/// The ring contains its own center for any `segments >= 3`.  A radius
/// that is not a positive finite number fails with
/// [`GeomError::InvalidRadius`]; a segment count below 3 is a caller bug.
pub fn disc(center: GeoPoint, radius_km: f64, segments: usize) -> GeomResult<Ring> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(GeomError::InvalidRadius(radius_km));
    }
    debug_assert!(segments >= 3, "disc needs at least 3 segments");
    let n = segments.max(3);

    let mut vertices = Vec::with_capacity(n + 1);
    for i in 0..n {
        let bearing = TAU * i as f64 / n as f64;
        vertices.push(destination(center, bearing, radius_km));
    }
    vertices.push(vertices[0]);

    Ok(Ring::new(vertices))
}
