//! Core error type.
//!
//! Downstream crates keep their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid routing settings: {0}")]
    InvalidSettings(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
