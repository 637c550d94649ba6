//! Routing graph construction and itinerary queries.

use tracing::{debug, trace};

use transit_catalogue::{Catalogue, CatalogueError, Line};
use transit_core::{LineId, Minutes, RoutingSettings, StopId, VertexId};

use crate::graph::{GraphBuilder, TransitGraph};
use crate::solver::{DijkstraSolver, PathSolver};
use crate::{Itinerary, RouteStep, RouterError, RouterResult};

// ── StopVertices ──────────────────────────────────────────────────────────────

/// The two graph vertices allocated for one stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StopVertices {
    /// Where riders are deposited.  Route queries start and end here.
    pub arrival: VertexId,
    /// Where riders board.  Reached from `arrival` through the wait edge.
    pub departure: VertexId,
}

// ── TransitRouter ─────────────────────────────────────────────────────────────

/// Fastest-path engine over a fully populated [`Catalogue`].
///
/// The graph and its itinerary side table are built once in the constructor
/// and never mutated; a router is `Send + Sync` whenever its solver is, and
/// can serve concurrent queries without locking.  If the catalogue changes,
/// build a new router.
///
/// Itinerary steps reference stops and lines by id; resolve names through
/// the catalogue the router was built from.
#[derive(Debug)]
pub struct TransitRouter<S: PathSolver = DijkstraSolver> {
    settings: RoutingSettings,
    graph: TransitGraph,
    solver: S,
    /// Indexed by `StopId`.
    stop_vertices: Vec<StopVertices>,
    /// Itinerary step of every edge, indexed by `EdgeId`.
    edge_steps: Vec<RouteStep>,
}

impl TransitRouter<DijkstraSolver> {
    /// Build a router that answers queries with [`DijkstraSolver`].
    pub fn new(catalogue: &Catalogue, settings: RoutingSettings) -> RouterResult<Self> {
        Self::with_solver(catalogue, settings, DijkstraSolver)
    }
}

impl<S: PathSolver> TransitRouter<S> {
    /// Build the routing graph for `catalogue`.
    ///
    /// Fails on invalid settings, or with
    /// [`CatalogueError::MissingDistance`] when two consecutive stops of a
    /// line have no road distance in either direction.
    pub fn with_solver(
        catalogue: &Catalogue,
        settings: RoutingSettings,
        solver: S,
    ) -> RouterResult<Self> {
        settings.validate()?;

        let edge_estimate = catalogue.stop_count()
            + catalogue
                .lines()
                .iter()
                .map(|l| {
                    let n = l.stops.len();
                    let per_direction = n * n.saturating_sub(1) / 2;
                    if l.is_circular { per_direction } else { 2 * per_direction }
                })
                .sum::<usize>();

        let mut build = GraphBuild {
            catalogue,
            settings,
            builder: GraphBuilder::with_edge_capacity(edge_estimate),
            stop_vertices: Vec::with_capacity(catalogue.stop_count()),
            edge_steps: Vec::with_capacity(edge_estimate),
        };

        build.add_stop_vertices();
        build.add_wait_edges();
        for (i, line) in catalogue.lines().iter().enumerate() {
            build.add_line_edges(LineId(i as u32), line)?;
        }

        let graph = build.builder.build();
        debug!(
            stops = catalogue.stop_count(),
            lines = catalogue.line_count(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "routing graph built"
        );

        Ok(Self {
            settings,
            graph,
            solver,
            stop_vertices: build.stop_vertices,
            edge_steps: build.edge_steps,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Fastest itinerary from `from` to `to`, or `None` if `to` cannot be
    /// reached.
    ///
    /// The search runs between the two arrival vertices, so an itinerary
    /// always starts by waiting at `from`.  When `from == to` the itinerary
    /// is that single wait.
    pub fn route(&self, from: StopId, to: StopId) -> RouterResult<Option<Itinerary>> {
        let source = self.vertices(from)?.arrival;
        let target = if from == to {
            self.vertices(to)?.departure
        } else {
            self.vertices(to)?.arrival
        };

        let Some(path) = self.solver.solve(&self.graph, source, target) else {
            trace!(%from, %to, "no route");
            return Ok(None);
        };

        let steps = path
            .edges
            .iter()
            .map(|&edge| {
                self.edge_steps
                    .get(edge.index())
                    .copied()
                    .ok_or(RouterError::UntaggedEdge(edge))
            })
            .collect::<RouterResult<Vec<RouteStep>>>()?;

        trace!(%from, %to, total_time = path.weight, steps = steps.len(), "route found");
        Ok(Some(Itinerary { total_time: path.weight, steps }))
    }

    /// [`route`](Self::route) by stop names, resolved through `catalogue`.
    ///
    /// An unknown name is [`CatalogueError::UnknownStop`].
    pub fn route_by_name(
        &self,
        catalogue: &Catalogue,
        from: &str,
        to: &str,
    ) -> RouterResult<Option<Itinerary>> {
        let resolve = |name: &str| {
            catalogue
                .stop_id(name)
                .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
        };
        self.route(resolve(from)?, resolve(to)?)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn vertices(&self, stop: StopId) -> RouterResult<StopVertices> {
        self.stop_vertices
            .get(stop.index())
            .copied()
            .ok_or(RouterError::UnknownStop(stop))
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

// ── Construction state ────────────────────────────────────────────────────────

/// Scratch state alive only inside [`TransitRouter::with_solver`].
struct GraphBuild<'a> {
    catalogue: &'a Catalogue,
    settings: RoutingSettings,
    builder: GraphBuilder,
    stop_vertices: Vec<StopVertices>,
    edge_steps: Vec<RouteStep>,
}

impl GraphBuild<'_> {
    fn add_stop_vertices(&mut self) {
        for _ in self.catalogue.stops() {
            let arrival = self.builder.add_vertex();
            let departure = self.builder.add_vertex();
            self.stop_vertices.push(StopVertices { arrival, departure });
        }
    }

    fn add_wait_edges(&mut self) {
        let time = self.settings.wait_minutes();
        for i in 0..self.stop_vertices.len() {
            let StopVertices { arrival, departure } = self.stop_vertices[i];
            self.add_edge(arrival, departure, RouteStep::Wait { stop: StopId(i as u32), time });
        }
    }

    fn add_line_edges(&mut self, id: LineId, line: &Line) -> RouterResult<()> {
        self.connect_span(id, line.stops.iter().copied())?;
        if !line.is_circular {
            self.connect_span(id, line.stops.iter().rev().copied())?;
        }
        Ok(())
    }

    /// One ride edge from every stop to each stop after it along `stops`.
    fn connect_span<I>(&mut self, line: LineId, stops: I) -> RouterResult<()>
    where
        I: Iterator<Item = StopId> + Clone,
    {
        let mut rest = stops;
        while let Some(first) = rest.next() {
            let boarding = self.stop_vertices[first.index()].departure;
            let mut time: Minutes = 0.0;
            let mut prev = first;

            for (hop, stop) in rest.clone().enumerate() {
                let meters = self.catalogue.require_distance(prev, stop)?;
                time += self.settings.travel_minutes(meters);
                prev = stop;

                let alighting = self.stop_vertices[stop.index()].arrival;
                let span_count = hop as u32 + 1;
                self.add_edge(boarding, alighting, RouteStep::Ride { line, span_count, time });
            }
        }
        Ok(())
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, step: RouteStep) {
        let edge = self.builder.add_edge(from, to, step.time());
        debug_assert_eq!(edge.index(), self.edge_steps.len());
        self.edge_steps.push(step);
    }
}
