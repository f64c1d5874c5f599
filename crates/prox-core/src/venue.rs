//! Venue descriptions and the immutable catalog.

use crate::{GeoPoint, VenueId};

/// A fixed point of interest with its descriptive attributes.
///
/// Created once at catalog load and never mutated afterwards; the
/// proximity engine shares the catalog across recomputations without
/// copying.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Venue {
    pub position: GeoPoint,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
}

/// Ordered, immutable collection of venues.
///
/// Insertion order is significant: it defines `VenueId` assignment and the
/// tie-break order when two candidates rank at equal distance.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueCatalog {
    venues: Vec<Venue>,
}

impl VenueCatalog {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Venue for `id`, or `None` if `id` is out of range (e.g. `INVALID`).
    pub fn get(&self, id: VenueId) -> Option<&Venue> {
        self.venues.get(id.index())
    }

    /// Iterate venues in catalog order with their assigned IDs.
    pub fn iter(&self) -> impl Iterator<Item = (VenueId, &Venue)> {
        self.venues
            .iter()
            .enumerate()
            .map(|(i, v)| (VenueId(i as u32), v))
    }
}
