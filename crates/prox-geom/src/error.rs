//! Geometry-subsystem error type.

use thiserror::Error;

/// Errors produced by `prox-geom`.
#[derive(Debug, Error)]
pub enum GeomError {
    #[error("invalid buffer radius {0} km: must be a positive finite value")]
    InvalidRadius(f64),

    #[error("empty point set: a bounding envelope needs at least one point")]
    EmptyInput,
}

pub type GeomResult<T> = Result<T, GeomError>;
