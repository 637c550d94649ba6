//! `transit-core`: foundational types shared by every `transit-*` crate.
//!
//! This crate has no `transit-*` dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`ids`]        | `StopId`, `LineId`, `VertexId`, `EdgeId`              |
//! | [`geo`]        | `Coordinates`, great-circle distance                  |
//! | [`settings`]   | `RoutingSettings`                                     |
//! | [`error`]      | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod settings;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coordinates;
pub use ids::{EdgeId, LineId, StopId, VertexId};
pub use settings::{Minutes, RoutingSettings};
