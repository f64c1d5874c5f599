//! The recompute orchestrator.
//!
//! `ProximityEngine` owns the two externally-settable inputs — the query
//! point and the buffer radius — plus the immutable venue catalog, and
//! re-derives all downstream state on every input change:
//!
//! 1. **Buffers**: one disc ring per venue, with per-venue distance and
//!    travel estimate when a query point is set.
//! 2. **Envelope**: axis-aligned box over every vertex of every buffer
//!    ring, with its geodesic perimeter.
//! 3. **Candidates**: buffers containing the query point, ranked by
//!    ascending distance (catalog order on ties).
//! 4. **Routes**: one segment per candidate plus the highlighted nearest
//!    segment.
//!
//! Each pass regenerates these wholesale; the previous generation is
//! discarded.  There is no partial update, which keeps every accessor
//! consistent with the inputs at all times.

use log::debug;

use prox_core::{GeoPoint, TravelEstimate, Venue, VenueCatalog, VenueId};
use prox_geom::{BoundingEnvelope, BufferIndex, GeomError, GeomResult, disc};

use crate::rank::rank;
use crate::route::build_routes;
use crate::{Buffer, EngineError, EngineResult, RouteSegment};

/// Orchestrator state, determined entirely by query-point presence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No query point set.  Buffers and envelope exist from the radius
    /// alone; candidates and routes are empty.
    Idle,
    /// Query point set; the full pipeline is populated.
    Active,
}

/// One wholesale generation of radius-dependent state.
struct Generation {
    buffers: Vec<Buffer>,
    envelope: BoundingEnvelope,
    index: BufferIndex,
}

/// Synchronous proximity pipeline over an immutable venue catalog.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].  Input setters
/// trigger one full recomputation before returning; accessors then expose
/// the derived state to the rendering layer.
#[derive(Debug)]
pub struct ProximityEngine {
    catalog: VenueCatalog,
    radius_km: f64,
    segments: usize,
    speed_kmh: f64,

    query: Option<GeoPoint>,

    buffers: Vec<Buffer>,
    envelope: BoundingEnvelope,
    index: BufferIndex,
    candidates: Vec<usize>,
    routes: Vec<RouteSegment>,
    nearest: Option<RouteSegment>,
}

impl ProximityEngine {
    /// Construct with validated parameters and build the initial `Idle`
    /// generation.  Called by the builder.
    pub(crate) fn new(
        catalog: VenueCatalog,
        radius_km: f64,
        segments: usize,
        speed_kmh: f64,
    ) -> EngineResult<Self> {
        let generation = build_generation(&catalog, radius_km, segments, None, speed_kmh)?;
        Ok(Self {
            catalog,
            radius_km,
            segments,
            speed_kmh,
            query: None,
            buffers: generation.buffers,
            envelope: generation.envelope,
            index: generation.index,
            candidates: Vec::new(),
            routes: Vec::new(),
            nearest: None,
        })
    }

    // ── Inputs ────────────────────────────────────────────────────────────

    /// Set (or replace) the query point and run a full recomputation.
    pub fn set_query_point(&mut self, point: GeoPoint) {
        self.query = Some(point);
        self.recompute();
    }

    /// Clear the query point, returning to `Idle`.
    ///
    /// Candidates, routes, and the nearest segment empty immediately; no
    /// stale data from the previous query point survives.
    pub fn clear_query_point(&mut self) {
        self.query = None;
        self.recompute();
    }

    /// Change the buffer radius and run a full recomputation.
    ///
    /// A radius that is not positive and finite is rejected with
    /// `InvalidRadius` and every piece of derived state keeps its previous
    /// generation.
    pub fn set_buffer_radius(&mut self, km: f64) -> EngineResult<()> {
        if !km.is_finite() || km <= 0.0 {
            return Err(EngineError::Geometry(GeomError::InvalidRadius(km)));
        }
        self.radius_km = km;
        self.recompute();
        Ok(())
    }

    // ── Outputs ───────────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        match self.query {
            None => EngineState::Idle,
            Some(_) => EngineState::Active,
        }
    }

    pub fn query_point(&self) -> Option<GeoPoint> {
        self.query
    }

    pub fn buffer_radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn catalog(&self) -> &VenueCatalog {
        &self.catalog
    }

    /// Venue owning `id`, for attribute lookups on ranked results.
    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.catalog.get(id)
    }

    /// The current generation of buffers, in catalog order.
    pub fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    /// Bounding envelope over every vertex of every buffer ring.
    pub fn envelope(&self) -> &BoundingEnvelope {
        &self.envelope
    }

    /// Buffers containing the query point, ascending by distance.
    pub fn candidate_set(&self) -> impl Iterator<Item = &Buffer> {
        self.candidates.iter().map(|&i| &self.buffers[i])
    }

    /// One `Normal` segment per candidate, in candidate order.
    pub fn route_segments(&self) -> &[RouteSegment] {
        &self.routes
    }

    /// Highlighted segment to the closest candidate, if any.
    pub fn nearest_route(&self) -> Option<&RouteSegment> {
        self.nearest.as_ref()
    }

    // ── Recompute pipeline ────────────────────────────────────────────────

    /// One full pass: regenerate buffers, envelope, and index, then the
    /// query-dependent candidate and route stages.
    fn recompute(&mut self) {
        match build_generation(
            &self.catalog,
            self.radius_km,
            self.segments,
            self.query,
            self.speed_kmh,
        ) {
            Ok(g) => {
                self.buffers = g.buffers;
                self.envelope = g.envelope;
                self.index = g.index;
            }
            // Inputs are validated at the API boundary, so this is
            // unreachable in practice; if it ever fires, the previous
            // generation stays published, same as the invalid-radius path.
            Err(e) => {
                log::error!("buffer generation failed, keeping previous state: {e}");
                return;
            }
        }

        match self.query {
            None => {
                self.candidates.clear();
                self.routes.clear();
                self.nearest = None;
            }
            Some(q) => {
                self.candidates = rank(&self.buffers, &self.index, q);
                let targets: Vec<GeoPoint> = self
                    .candidates
                    .iter()
                    .filter_map(|&i| self.catalog.get(self.buffers[i].venue))
                    .map(|v| v.position)
                    .collect();
                let (routes, nearest) = build_routes(q, &targets);
                self.routes = routes;
                self.nearest = nearest;
            }
        }

        debug!(
            "recompute: state={:?} radius_km={} candidates={}",
            self.state(),
            self.radius_km,
            self.candidates.len()
        );
    }
}

/// Build one generation of buffers, envelope, and index.
///
/// Pure with respect to the engine: results are returned, never published.
/// Distances and travel estimates are filled only when `query` is set.
fn build_generation(
    catalog: &VenueCatalog,
    radius_km: f64,
    segments: usize,
    query: Option<GeoPoint>,
    speed_kmh: f64,
) -> GeomResult<Generation> {
    let mut buffers = Vec::with_capacity(catalog.len());
    for (id, venue) in catalog.iter() {
        let ring = disc(venue.position, radius_km, segments)?;
        let distance_km = query.map(|q| venue.position.distance_km(q));
        let travel = distance_km.map(|d| TravelEstimate::from_distance(d, speed_kmh));
        buffers.push(Buffer {
            venue: id,
            ring,
            distance_km,
            travel,
        });
    }

    let envelope = BoundingEnvelope::of_points(
        buffers
            .iter()
            .flat_map(|b| b.ring.vertices().iter().copied()),
    )?;
    let index = BufferIndex::build(buffers.iter().map(|b| (b.venue, &b.ring)));

    Ok(Generation {
        buffers,
        envelope,
        index,
    })
}
