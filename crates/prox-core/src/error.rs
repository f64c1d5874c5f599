//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `ProxError` via `From` impls or wrap it as one variant.  Prefer
//! whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `prox-core`.
#[derive(Debug, Error)]
pub enum ProxError {
    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `prox-*` crates.
pub type ProxResult<T> = Result<T, ProxError>;
