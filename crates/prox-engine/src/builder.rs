//! Fluent builder for constructing a [`ProximityEngine`].

use prox_core::{DEFAULT_SPEED_KMH, VenueCatalog};
use prox_geom::GeomError;

use crate::{EngineError, EngineResult, ProximityEngine};

/// Default buffer radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 0.5;

/// Default number of vertices per disc ring.
pub const DEFAULT_SEGMENTS: usize = 32;

/// Fluent builder for [`ProximityEngine`].
///
/// # Required inputs
///
/// - A non-empty [`VenueCatalog`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default              |
/// |---------------------|----------------------|
/// | `.radius_km(r)`     | `0.5`                |
/// | `.segments(n)`      | `32` (minimum 3)     |
/// | `.speed_kmh(v)`     | `30.0`               |
///
/// # Example
///
/// ```rust,ignore
/// let catalog = load_catalog_csv(Path::new("venues.csv"))?;
/// let mut engine = EngineBuilder::new(catalog).radius_km(0.2).build()?;
/// engine.set_query_point(GeoPoint::new(-75.515, 5.069));
/// ```
pub struct EngineBuilder {
    catalog: VenueCatalog,
    radius_km: f64,
    segments: usize,
    speed_kmh: f64,
}

impl EngineBuilder {
    pub fn new(catalog: VenueCatalog) -> Self {
        Self {
            catalog,
            radius_km: DEFAULT_RADIUS_KM,
            segments: DEFAULT_SEGMENTS,
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }

    /// Initial buffer radius in kilometres (must be positive).
    pub fn radius_km(mut self, km: f64) -> Self {
        self.radius_km = km;
        self
    }

    /// Vertices per disc ring (must be at least 3).
    pub fn segments(mut self, n: usize) -> Self {
        self.segments = n;
        self
    }

    /// Straight-line speed used for travel estimates, in km/h.
    pub fn speed_kmh(mut self, v: f64) -> Self {
        self.speed_kmh = v;
        self
    }

    /// Validate inputs, build the initial `Idle` generation, and return a
    /// ready engine.
    ///
    /// An empty catalog is a configuration error: without venues the
    /// bounding envelope has no input and the engine could never leave a
    /// degenerate state.
    pub fn build(self) -> EngineResult<ProximityEngine> {
        if self.catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        if self.segments < 3 {
            return Err(EngineError::Config(format!(
                "disc segments must be at least 3, got {}",
                self.segments
            )));
        }
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(EngineError::Config(format!(
                "travel speed must be positive, got {} km/h",
                self.speed_kmh
            )));
        }
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(EngineError::Geometry(GeomError::InvalidRadius(
                self.radius_km,
            )));
        }

        ProximityEngine::new(self.catalog, self.radius_km, self.segments, self.speed_kmh)
    }
}
