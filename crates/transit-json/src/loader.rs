//! Catalogue construction from base requests.
//!
//! Stops go in first, then lines, then road distances, so every record may
//! refer to stops declared anywhere in the document.

use transit_catalogue::{Catalogue, CatalogueError};
use transit_core::{Coordinates, StopId};

use crate::model::BaseRequest;
use crate::JsonResult;

pub fn build_catalogue(requests: &[BaseRequest]) -> JsonResult<Catalogue> {
    let mut catalogue = Catalogue::new();

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(
                stop.name.clone(),
                Coordinates::new(stop.latitude, stop.longitude),
            )?;
        }
    }

    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_line(bus.name.clone(), bus.stops.as_slice(), bus.is_roundtrip)?;
        }
    }

    for request in requests {
        let BaseRequest::Stop(stop) = request else { continue };
        let from = resolve(&catalogue, &stop.name)?;
        for (neighbour, &meters) in &stop.road_distances {
            let to = resolve(&catalogue, neighbour)?;
            catalogue.set_distance(from, to, meters);
        }
    }

    Ok(catalogue)
}

fn resolve(catalogue: &Catalogue, name: &str) -> Result<StopId, CatalogueError> {
    catalogue
        .stop_id(name)
        .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
}
