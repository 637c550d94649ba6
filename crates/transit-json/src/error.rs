//! JSON-layer error type.

use thiserror::Error;

use transit_catalogue::CatalogueError;
use transit_router::RouterError;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("route request {request_id} needs routing_settings in the document")]
    MissingRoutingSettings { request_id: i64 },
}

pub type JsonResult<T> = Result<T, JsonError>;
