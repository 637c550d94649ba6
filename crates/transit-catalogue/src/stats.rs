//! Per-line statistics.
//!
//! Nothing here is stored: every query recomputes from the line's stop list
//! and the catalogue's distances.

use rustc_hash::FxHashSet;

use crate::{Catalogue, CatalogueResult, Line};

/// Statistics of one line over its travelled path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineStats {
    /// Stop visits along the travelled path (`2n - 1` for a non-circular line).
    pub stop_count: usize,
    /// Distinct stops the line lists.
    pub unique_stop_count: usize,
    /// Length by road distances, in metres.
    pub road_length_m: f64,
    /// Length by great-circle distances, in metres.
    pub geo_length_m: f64,
}

impl LineStats {
    pub(crate) fn compute(catalogue: &Catalogue, line: &Line) -> CatalogueResult<Self> {
        let unique_stop_count = line.stops.iter().collect::<FxHashSet<_>>().len();

        let mut road_length_m = 0.0;
        let mut geo_length_m = 0.0;
        for (from, to) in line.forward_hops() {
            road_length_m += catalogue.require_distance(from, to)? as f64;
            geo_length_m += catalogue
                .stop(from)
                .coordinates
                .distance_m(catalogue.stop(to).coordinates);
        }

        if !line.is_circular {
            road_length_m *= 2.0;
            geo_length_m *= 2.0;
        }

        Ok(Self {
            stop_count: line.stop_visits(),
            unique_stop_count,
            road_length_m,
            geo_length_m,
        })
    }

    /// Ratio of road length to straight-line length.
    ///
    /// `None` when the straight-line length is zero: a single-stop line, or
    /// one whose stops all share a position.
    pub fn curvature(&self) -> Option<f64> {
        (self.geo_length_m > 0.0).then(|| self.road_length_m / self.geo_length_m)
    }
}
