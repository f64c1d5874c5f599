//! Engine error type.

use thiserror::Error;

use prox_geom::GeomError;

/// Errors produced by `prox-engine`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("venue catalog is empty")]
    EmptyCatalog,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("geometry error: {0}")]
    Geometry(#[from] GeomError),
}

pub type EngineResult<T> = Result<T, EngineError>;
