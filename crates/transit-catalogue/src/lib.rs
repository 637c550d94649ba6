//! `transit-catalogue`: the in-memory model of a transit network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`domain`]    | `Stop`, `Line`                                           |
//! | [`catalogue`] | `Catalogue` (arenas, name indexes, distances)            |
//! | [`stats`]     | `LineStats` and its computation                          |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                   |
//!
//! # Lifecycle
//!
//! The catalogue is append-only: stops, lines and road distances are added
//! while the input is loaded, after which it is only read.  All
//! cross-references are [`StopId`](transit_core::StopId) /
//! [`LineId`](transit_core::LineId) slots into the arenas, never pointers.

pub mod catalogue;
pub mod domain;
pub mod error;
pub mod stats;


pub use catalogue::Catalogue;
pub use domain::{Line, Stop};
pub use error::{CatalogueError, CatalogueResult};
pub use stats::LineStats;
