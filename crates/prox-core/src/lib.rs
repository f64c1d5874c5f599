//! `prox-core` — foundational types for the venue proximity workspace.
//!
//! This crate is a dependency of every other `prox-*` crate.  It has no
//! `prox-*` dependencies and minimal external ones (`csv`, `serde`, and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance                        |
//! | [`units`]  | `DistanceUnit`, `TravelEstimate`                      |
//! | [`ids`]    | `VenueId`                                             |
//! | [`venue`]  | `Venue`, `VenueCatalog`                               |
//! | [`loader`] | CSV catalog loading                                   |
//! | [`error`]  | `ProxError`, `ProxResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod geo;
pub mod ids;
pub mod loader;
pub mod units;
pub mod venue;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ProxError, ProxResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint};
pub use ids::VenueId;
pub use loader::{load_catalog_csv, load_catalog_reader};
pub use units::{DEFAULT_SPEED_KMH, DistanceUnit, TravelEstimate};
pub use venue::{Venue, VenueCatalog};
