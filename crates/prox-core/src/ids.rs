//! Strongly typed venue identifier.
//!
//! `VenueId` is a zero-cost wrapper over the venue's position in the
//! catalog.  The inner integer is `pub` to allow direct indexing via
//! `id.0 as usize`, but callers should prefer the `.index()` helper.

use std::fmt;

/// Index of a venue in the catalog's insertion order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueId(pub u32);

impl VenueId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: VenueId = VenueId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for VenueId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VenueId({})", self.0)
    }
}

impl From<VenueId> for usize {
    #[inline(always)]
    fn from(id: VenueId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for VenueId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VenueId, Self::Error> {
        u32::try_from(n).map(VenueId)
    }
}
