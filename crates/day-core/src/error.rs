//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `day-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `day-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
