//! `prox-engine` — recompute orchestrator for the venue proximity core.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`buffer`]  | `Buffer` — per-venue derived state                        |
//! | [`rank`]    | containment filter + stable distance ranking              |
//! | [`route`]   | `RouteSegment`, `Emphasis`, route construction            |
//! | [`engine`]  | `ProximityEngine`, `EngineState`                          |
//! | [`builder`] | `EngineBuilder` and defaults                              |
//! | [`error`]   | `EngineError`, `EngineResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod buffer;
pub mod builder;
pub mod engine;
pub mod error;
pub mod rank;
pub mod route;

#[cfg(test)]
mod tests;

pub use buffer::Buffer;
pub use builder::{DEFAULT_RADIUS_KM, DEFAULT_SEGMENTS, EngineBuilder};
pub use engine::{EngineState, ProximityEngine};
pub use error::{EngineError, EngineResult};
pub use rank::rank;
pub use route::{Emphasis, RouteSegment, build_routes};
