//! Linear distance units and straight-line travel estimates.

/// Kilometres per statute mile.
const KM_PER_MILE: f64 = 1.609_344;

/// Default straight-line travel speed in km/h used for duration estimates.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Linear unit for reporting distances.  All internal math is kilometres;
/// other units are fixed-factor conversions applied at the edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Meters,
    Miles,
}

impl DistanceUnit {
    /// Units of `self` per kilometre.
    #[inline]
    pub fn per_km(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Meters => 1_000.0,
            DistanceUnit::Miles => 1.0 / KM_PER_MILE,
        }
    }

    #[inline]
    pub fn from_km(self, km: f64) -> f64 {
        km * self.per_km()
    }
}

/// Straight-line travel duration at a fixed speed.
///
/// No road routing happens anywhere in this workspace; the estimate is
/// `distance / speed` and exists because the rendering layer displays it
/// alongside each candidate venue.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelEstimate {
    pub minutes: f64,
}

impl TravelEstimate {
    /// Estimate for covering `distance_km` at `speed_kmh`.
    #[inline]
    pub fn from_distance(distance_km: f64, speed_kmh: f64) -> Self {
        Self {
            minutes: distance_km / speed_kmh * 60.0,
        }
    }
}

impl std::fmt::Display for TravelEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} minutes", self.minutes)
    }
}
