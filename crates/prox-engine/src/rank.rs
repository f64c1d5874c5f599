//! Containment filtering and distance ranking.

use prox_core::GeoPoint;
use prox_geom::BufferIndex;

use crate::Buffer;

/// Indices of the buffers containing `query`, ascending by stored distance.
///
/// `buffers` must be in catalog order (buffer `i` owned by `VenueId(i)`),
/// which is how the engine builds every generation.
///
/// The R-tree prefilter narrows the field; the survivors then pass the
/// exact boundary-inclusive ring test in catalog order.  The final sort is
/// stable, so venues at equal distance keep their catalog order across
/// recomputations — a non-stable sort here could flip tied venues between
/// passes and make downstream rendering flicker.
///
/// Buffers without a stored distance rank last (only reachable if the
/// caller skipped the distance pass).  An empty result is not an error.
pub fn rank(buffers: &[Buffer], index: &BufferIndex, query: GeoPoint) -> Vec<usize> {
    let mut hits: Vec<usize> = index
        .candidates(query)
        .into_iter()
        .map(|id| id.index())
        .collect();

    // Tree traversal order is arbitrary; restore catalog order before the
    // stable distance sort so ties break deterministically.
    hits.sort_unstable();
    hits.retain(|&i| buffers[i].ring.contains(query));

    hits.sort_by(|&a, &b| {
        let da = buffers[a].distance_km.unwrap_or(f64::INFINITY);
        let db = buffers[b].distance_km.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    hits
}
