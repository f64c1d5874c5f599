//! Closed coordinate ring and point-in-ring containment.

use prox_core::GeoPoint;

/// Tolerance for the collinearity test in the boundary check, in squared
/// degrees.  At equatorial scale this is well below a millimetre.
const EDGE_EPS: f64 = 1e-12;

/// A closed ring of coordinates (first vertex repeated as the last).
///
/// Rings are treated as planar polygons in lon/lat space for containment,
/// matching the convention of the buffer and envelope generators that
/// produce them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    vertices: Vec<GeoPoint>,
}

impl Ring {
    /// Build a ring from vertices, closing it if the caller has not.
    ///
    /// Expects at least three distinct vertices; degenerate rings still
    /// construct but contain nothing beyond their own boundary.
    pub fn new(mut vertices: Vec<GeoPoint>) -> Self {
        debug_assert!(vertices.len() >= 3, "ring needs at least 3 vertices");
        if vertices.first() != vertices.last() {
            if let Some(&first) = vertices.first() {
                vertices.push(first);
            }
        }
        Self { vertices }
    }

    /// All vertices including the closing repeat of the first.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Number of distinct vertices (excluding the closing repeat).
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Axis-aligned bounds as `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_lon = f64::INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        for v in &self.vertices {
            min_lon = min_lon.min(v.lon);
            min_lat = min_lat.min(v.lat);
            max_lon = max_lon.max(v.lon);
            max_lat = max_lat.max(v.lat);
        }
        (min_lon, min_lat, max_lon, max_lat)
    }

    /// True if `p` lies exactly on one of the ring's edges or vertices
    /// (within the collinearity tolerance).
    pub fn on_boundary(&self, p: GeoPoint) -> bool {
        self.vertices
            .windows(2)
            .any(|edge| on_segment(p, edge[0], edge[1]))
    }

    /// Boundary-inclusive point-in-ring test (ray casting).
    ///
    /// A point exactly on an edge or vertex counts as contained.  The
    /// inclusive policy keeps the containment filter deterministic for
    /// query points that land precisely on a buffer edge: such venues stay
    /// in the candidate set rather than flickering in and out.
    pub fn contains(&self, p: GeoPoint) -> bool {
        let verts = &self.vertices;
        if verts.len() < 4 {
            return false;
        }

        let mut inside = false;
        for edge in verts.windows(2) {
            let (a, b) = (edge[0], edge[1]);

            if on_segment(p, a, b) {
                return true;
            }

            // Horizontal ray toward +∞ longitude: count edge crossings.
            if (a.lat > p.lat) != (b.lat > p.lat) {
                let t = (p.lat - a.lat) / (b.lat - a.lat);
                let lon_int = a.lon + t * (b.lon - a.lon);
                if p.lon < lon_int {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// True if `p` lies on the segment `a`–`b` (within `EDGE_EPS`).
fn on_segment(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> bool {
    let cross = (b.lon - a.lon) * (p.lat - a.lat) - (b.lat - a.lat) * (p.lon - a.lon);
    if cross.abs() > EDGE_EPS {
        return false;
    }
    let within_lon = p.lon >= a.lon.min(b.lon) && p.lon <= a.lon.max(b.lon);
    let within_lat = p.lat >= a.lat.min(b.lat) && p.lat <= a.lat.max(b.lat);
    within_lon && within_lat
}
