//! Route segments connecting the query point to candidate venues.

use prox_core::GeoPoint;

/// Rendering emphasis for a route segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Emphasis {
    Normal,
    Nearest,
}

/// A straight connecting line from the query point to a venue.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub emphasis: Emphasis,
}

/// Build one `Normal` segment per ranked target, in ranked order, plus a
/// `Nearest` segment duplicating the first target's endpoints.
///
/// The nearest segment repeats the first normal segment rather than
/// replacing it: renderers draw the full fan of lines and overlay the
/// highlighted one.  Both outputs are empty/absent when `targets` is.
pub fn build_routes(
    query: GeoPoint,
    targets: &[GeoPoint],
) -> (Vec<RouteSegment>, Option<RouteSegment>) {
    let segments: Vec<RouteSegment> = targets
        .iter()
        .map(|&to| RouteSegment {
            from: query,
            to,
            emphasis: Emphasis::Normal,
        })
        .collect();

    let nearest = segments.first().map(|s| RouteSegment {
        emphasis: Emphasis::Nearest,
        ..*s
    });

    (segments, nearest)
}
