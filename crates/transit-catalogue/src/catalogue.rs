//! The transit catalogue: stop and line arenas plus their indexes.
//!
//! # Data layout
//!
//! ```text
//! stops:         Vec<Stop>                 indexed by StopId
//! lines:         Vec<Line>                 indexed by LineId
//! lines_by_stop: Vec<Vec<LineId>>          indexed by StopId, sorted by line name
//! distances:     (StopId, StopId) → metres directed, looked up with reverse fallback
//! ```
//!
//! Arenas are append-only, so a `StopId` or `LineId` handed out once stays
//! valid for the catalogue's lifetime.

use rustc_hash::FxHashMap;
use tracing::warn;

use transit_core::{Coordinates, LineId, StopId};

use crate::{CatalogueError, CatalogueResult, Line, LineStats, Stop};

/// Owns every stop and line of the network and the road distances between
/// stops.
#[derive(Debug, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    lines: Vec<Line>,

    stop_index: FxHashMap<String, StopId>,
    line_index: FxHashMap<String, LineId>,

    /// Lines passing each stop, kept sorted by line name.
    lines_by_stop: Vec<Vec<LineId>>,

    /// Directed road distances in metres.
    distances: FxHashMap<(StopId, StopId), u32>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Add a stop and return its id (sequential from 0).
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> CatalogueResult<StopId> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len() as u32);
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop { name, coordinates });
        self.lines_by_stop.push(Vec::new());
        Ok(id)
    }

    /// Add a line over already-known stops and register it with every stop
    /// it visits.
    pub fn add_line<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_circular: bool,
    ) -> CatalogueResult<LineId> {
        let name = name.into();
        if self.line_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateLine(name));
        }
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyLine(name));
        }

        let stops = stop_names
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<CatalogueResult<Vec<StopId>>>()?;

        let id = LineId(self.lines.len() as u32);
        for &stop in &stops {
            let serving = &mut self.lines_by_stop[stop.index()];
            // A line may list the same stop more than once.
            if serving.contains(&id) {
                continue;
            }
            let by_name = |other: &LineId| self.lines[other.index()].name.as_str().cmp(name.as_str());
            if let Err(pos) = serving.binary_search_by(by_name) {
                serving.insert(pos, id);
            }
        }

        self.line_index.insert(name.clone(), id);
        self.lines.push(Line { name, stops, is_circular });
        Ok(id)
    }

    /// Set the road distance for the ordered pair `(from, to)`, replacing any
    /// earlier value for that pair.  The reverse pair is left untouched.
    pub fn set_distance(&mut self, from: StopId, to: StopId, meters: u32) {
        self.distances.insert((from, to), meters);
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Road distance from `from` to `to`.
    ///
    /// Falls back to the `(to, from)` entry when the exact pair is absent;
    /// `None` when neither direction is known.
    pub fn distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Like [`distance`](Self::distance), but a missing value is a
    /// [`CatalogueError::MissingDistance`].
    pub fn require_distance(&self, from: StopId, to: StopId) -> CatalogueResult<u32> {
        self.distance(from, to).ok_or_else(|| CatalogueError::MissingDistance {
            from: self.stop(from).name.clone(),
            to:   self.stop(to).name.clone(),
        })
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn line_id(&self, name: &str) -> Option<LineId> {
        self.line_index.get(name).copied()
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    /// All stops in insertion order; position `i` is `StopId(i)`.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All lines in insertion order; position `i` is `LineId(i)`.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines passing `stop`, ordered by line name.
    ///
    /// `None` when no line serves the stop.  Callers distinguish an unknown
    /// stop name with [`stop_id`](Self::stop_id) first.
    pub fn lines_serving(&self, stop: StopId) -> Option<&[LineId]> {
        match self.lines_by_stop.get(stop.index()) {
            Some(lines) if !lines.is_empty() => Some(lines),
            _ => None,
        }
    }

    /// Names of the lines passing the stop called `name`, ordered by name.
    ///
    /// A known stop with no lines yields an empty list; an unknown stop is
    /// [`CatalogueError::UnknownStop`].
    pub fn lines_serving_by_name(&self, name: &str) -> CatalogueResult<Vec<&str>> {
        let stop = self.require_stop(name)?;
        Ok(self
            .lines_serving(stop)
            .unwrap_or_default()
            .iter()
            .map(|&line| self.line(line).name.as_str())
            .collect())
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Compute the statistics of `line` from the current distances.
    pub fn line_stats(&self, line: LineId) -> CatalogueResult<LineStats> {
        let line = self.line(line);
        let stats = LineStats::compute(self, line)?;
        if stats.road_length_m < stats.geo_length_m {
            warn!(
                line = %line.name,
                road_m = stats.road_length_m,
                straight_m = stats.geo_length_m,
                "road length is shorter than straight-line length"
            );
        }
        Ok(stats)
    }

    pub fn line_stats_by_name(&self, name: &str) -> CatalogueResult<LineStats> {
        let id = self
            .line_id(name)
            .ok_or_else(|| CatalogueError::UnknownLine(name.to_owned()))?;
        self.line_stats(id)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn require_stop(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
    }
}
