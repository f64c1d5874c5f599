//! R-tree prefilter over ring bounding boxes.
//!
//! The containment filter runs an exact point-in-ring test per venue.  The
//! index answers "which rings' bounding boxes cover this point" first, so
//! the exact test only runs on a (usually small) superset of the true
//! candidate set.

use rstar::{AABB, RTree, RTreeObject};

use prox_core::{GeoPoint, VenueId};

use crate::Ring;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a ring's `[lon, lat]` bounding box with the
/// owning `VenueId`.
#[derive(Clone, Debug)]
struct RingEntry {
    min: [f64; 2],
    max: [f64; 2],
    id: VenueId,
}

impl RTreeObject for RingEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

// ── BufferIndex ───────────────────────────────────────────────────────────────

/// Spatial index over a generation of buffer rings.
///
/// Rebuilt wholesale whenever the rings change; a generation is small
/// enough that bulk loading is effectively free.
#[derive(Debug)]
pub struct BufferIndex {
    tree: RTree<RingEntry>,
}

impl BufferIndex {
    /// Bulk-load the index from `(id, ring)` pairs.
    pub fn build<'a, I>(rings: I) -> Self
    where
        I: IntoIterator<Item = (VenueId, &'a Ring)>,
    {
        let entries: Vec<RingEntry> = rings
            .into_iter()
            .map(|(id, ring)| {
                let (min_lon, min_lat, max_lon, max_lat) = ring.bounds();
                RingEntry {
                    min: [min_lon, min_lat],
                    max: [max_lon, max_lat],
                    id,
                }
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// IDs whose ring bounding box covers `point` — a superset of the exact
    /// containment result, in arbitrary tree order.
    pub fn candidates(&self, point: GeoPoint) -> Vec<VenueId> {
        let probe = AABB::from_point([point.lon, point.lat]);
        self.tree
            .locate_in_envelope_intersecting(&probe)
            .map(|e| e.id)
            .collect()
    }
}
