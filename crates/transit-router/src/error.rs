//! Router error type.

use thiserror::Error;

use transit_catalogue::CatalogueError;
use transit_core::{CoreError, EdgeId, StopId};

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Settings(#[from] CoreError),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("stop {0} is not part of the routing graph")]
    UnknownStop(StopId),

    /// The solver returned an edge the router never tagged.
    #[error("edge {0} has no itinerary step")]
    UntaggedEdge(EdgeId),
}

pub type RouterResult<T> = Result<T, RouterError>;
