//! `transit-router`: fastest itineraries over a transit catalogue.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `TransitGraph` (CSR adjacency), `GraphBuilder`            |
//! | [`solver`]    | `PathSolver` trait, `SolvedPath`, `DijkstraSolver`        |
//! | [`itinerary`] | `Itinerary`, `RouteStep`                                  |
//! | [`router`]    | `TransitRouter`, `StopVertices`                           |
//! | [`error`]     | `RouterError`, `RouterResult<T>`                          |
//!
//! # Graph encoding
//!
//! Every stop owns two vertices.  Riders are deposited at the *arrival*
//! vertex and board from the *departure* vertex; the wait edge between them
//! costs the fixed wait time.  Each line contributes one ride edge per
//! `(boarding, alighting)` pair reachable without changing, weighted by the
//! cumulative travel time, so the solver picks boarding and alighting points
//! directly and an itinerary never needs merging.

pub mod error;
pub mod graph;
pub mod itinerary;
pub mod router;
pub mod solver;


pub use error::{RouterError, RouterResult};
pub use graph::{GraphBuilder, TransitGraph};
pub use itinerary::{Itinerary, RouteStep};
pub use router::{StopVertices, TransitRouter};
pub use solver::{DijkstraSolver, PathSolver, SolvedPath};
