//! `prox-geom` — ring geometry for the venue proximity core.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ring`]     | `Ring`, boundary-inclusive containment                  |
//! | [`disc`]     | `disc` buffer generator, `destination` projection       |
//! | [`envelope`] | `BoundingEnvelope`                                      |
//! | [`index`]    | `BufferIndex` (R-tree prefilter via `rstar`)            |
//! | [`error`]    | `GeomError`, `GeomResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.          |

pub mod disc;
pub mod envelope;
pub mod error;
pub mod index;
pub mod ring;


pub use disc::{destination, disc};
pub use envelope::BoundingEnvelope;
pub use error::{GeomError, GeomResult};
pub use index::BufferIndex;
pub use ring::Ring;
