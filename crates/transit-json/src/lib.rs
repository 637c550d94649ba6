//! `transit-json`: the JSON boundary of the transit catalogue.
//!
//! Reads one input document (`base_requests`, optional `routing_settings`,
//! `stat_requests`), builds the [`Catalogue`](transit_catalogue::Catalogue)
//! and, when routing settings are present, the
//! [`TransitRouter`](transit_router::TransitRouter), then answers every stat
//! request in order.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`model`]   | serde types for the input and output documents            |
//! | [`loader`]  | `build_catalogue`                                         |
//! | [`handler`] | `RequestHandler`                                          |
//! | [`error`]   | `JsonError`, `JsonResult<T>`                              |

pub mod error;
pub mod handler;
pub mod loader;
pub mod model;

#[cfg(test)]
mod tests;

use std::io::{Read, Write};

use tracing::debug;

use transit_router::TransitRouter;

pub use error::{JsonError, JsonResult};
pub use handler::RequestHandler;
pub use loader::build_catalogue;
pub use model::{BaseRequest, Document, RouteItem, StatRequest, StatResponse};

/// Answer every stat request of the document read from `input` and write
/// the responses to `output` as one JSON array.
pub fn process<R: Read, W: Write>(input: R, mut output: W) -> JsonResult<()> {
    let document: Document = serde_json::from_reader(input)?;
    let responses = answer_document(&document)?;
    serde_json::to_writer_pretty(&mut output, &responses)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

/// Build the catalogue and router for `document` and answer its stat
/// requests in order.
pub fn answer_document(document: &Document) -> JsonResult<Vec<StatResponse>> {
    let catalogue = build_catalogue(&document.base_requests)?;
    debug!(
        stops = catalogue.stop_count(),
        lines = catalogue.line_count(),
        requests = document.stat_requests.len(),
        "catalogue loaded"
    );

    let router = document
        .routing_settings
        .map(|settings| TransitRouter::new(&catalogue, settings))
        .transpose()?;

    let handler = RequestHandler::new(&catalogue, router.as_ref());
    let mut responses = Vec::with_capacity(document.stat_requests.len());
    for request in &document.stat_requests {
        if let Some(response) = handler.answer(request)? {
            responses.push(response);
        }
    }
    Ok(responses)
}
