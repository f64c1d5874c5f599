//! Per-venue buffer state derived from the current inputs.

use prox_core::{TravelEstimate, VenueId};
use prox_geom::Ring;

/// One venue's distance buffer plus query-dependent derived fields.
///
/// A full generation of buffers is rebuilt on every input change; there is
/// no incremental update.  `distance_km` and `travel` are `Some` only while
/// a query point is set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffer {
    /// Catalog index of the venue this buffer surrounds.
    pub venue: VenueId,

    /// Closed ring approximating a disc of the configured radius around
    /// the venue's position.  Encloses that position by construction.
    pub ring: Ring,

    /// Great-circle distance from the current query point to the venue.
    pub distance_km: Option<f64>,

    /// Straight-line travel estimate at the configured speed.
    pub travel: Option<TravelEstimate>,
}
