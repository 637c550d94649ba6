//! Catalogue error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("stop {0:?} is already in the catalogue")]
    DuplicateStop(String),

    #[error("line {0:?} is already in the catalogue")]
    DuplicateLine(String),

    #[error("stop {0:?} not found")]
    UnknownStop(String),

    #[error("line {0:?} not found")]
    UnknownLine(String),

    #[error("line {0:?} has no stops")]
    EmptyLine(String),

    /// Two consecutive stops of a line have no road distance in either
    /// direction.  The network was loaded inconsistently.
    #[error("no road distance between {from:?} and {to:?}")]
    MissingDistance { from: String, to: String },
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
