//! Stat-request dispatch.

use tracing::{trace, warn};

use transit_catalogue::{Catalogue, CatalogueError};
use transit_router::{Itinerary, RouteStep, RouterError, TransitRouter};

use crate::model::{RouteItem, StatRequest, StatResponse};
use crate::{JsonError, JsonResult};

/// Answers stat requests against a loaded catalogue and, optionally, a
/// router built from it.
///
/// Unknown names and unreachable destinations are answered with
/// `"not found"`; data-consistency faults are returned as errors.
pub struct RequestHandler<'a> {
    catalogue: &'a Catalogue,
    router: Option<&'a TransitRouter>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a Catalogue, router: Option<&'a TransitRouter>) -> Self {
        Self { catalogue, router }
    }

    /// Answer one request.  `None` for a request type this layer does not
    /// know, which gets no entry in the response array.
    pub fn answer(&self, request: &StatRequest) -> JsonResult<Option<StatResponse>> {
        trace!(id = ?request.id(), "answering stat request");
        let response = match request {
            StatRequest::Bus { id, name } => self.line_stats(*id, name)?,
            StatRequest::Stop { id, name } => self.stop_lines(*id, name)?,
            StatRequest::Route { id, from, to } => self.route(*id, from, to)?,
            StatRequest::Map { id } => {
                warn!(id = *id, "map rendering is not supported");
                StatResponse::not_found(*id)
            }
            StatRequest::Unsupported => {
                warn!("skipping stat request of unknown type");
                return Ok(None);
            }
        };
        Ok(Some(response))
    }

    fn line_stats(&self, request_id: i64, name: &str) -> JsonResult<StatResponse> {
        match self.catalogue.line_stats_by_name(name) {
            Ok(stats) => Ok(StatResponse::Bus {
                request_id,
                // A line with no straight-line extent is reported as straight.
                curvature: stats.curvature().unwrap_or(1.0),
                route_length: stats.road_length_m,
                stop_count: stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
            }),
            Err(CatalogueError::UnknownLine(_)) => Ok(StatResponse::not_found(request_id)),
            Err(e) => Err(e.into()),
        }
    }

    fn stop_lines(&self, request_id: i64, name: &str) -> JsonResult<StatResponse> {
        match self.catalogue.lines_serving_by_name(name) {
            Ok(lines) => Ok(StatResponse::Stop {
                request_id,
                buses: lines.into_iter().map(str::to_owned).collect(),
            }),
            Err(CatalogueError::UnknownStop(_)) => Ok(StatResponse::not_found(request_id)),
            Err(e) => Err(e.into()),
        }
    }

    fn route(&self, request_id: i64, from: &str, to: &str) -> JsonResult<StatResponse> {
        let router = self
            .router
            .ok_or(JsonError::MissingRoutingSettings { request_id })?;

        match router.route_by_name(self.catalogue, from, to) {
            Ok(Some(itinerary)) => Ok(StatResponse::Route {
                request_id,
                total_time: itinerary.total_time,
                items: self.route_items(&itinerary),
            }),
            Ok(None) | Err(RouterError::Catalogue(CatalogueError::UnknownStop(_))) => {
                Ok(StatResponse::not_found(request_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn route_items(&self, itinerary: &Itinerary) -> Vec<RouteItem> {
        itinerary
            .steps
            .iter()
            .map(|step| match *step {
                RouteStep::Wait { stop, time } => RouteItem::Wait {
                    stop_name: self.catalogue.stop(stop).name.clone(),
                    time,
                },
                RouteStep::Ride { line, span_count, time } => RouteItem::Bus {
                    bus: self.catalogue.line(line).name.clone(),
                    span_count,
                    time,
                },
            })
            .collect()
    }
}
