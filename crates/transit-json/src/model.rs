//! Input and output document types.
//!
//! # Input
//!
//! ```json
//! {
//!   "base_requests": [
//!     {"type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2,
//!      "road_distances": {"B": 3900}},
//!     {"type": "Bus", "name": "14", "stops": ["A", "B"], "is_roundtrip": false}
//!   ],
//!   "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
//!   "stat_requests": [
//!     {"id": 1, "type": "Bus", "name": "14"},
//!     {"id": 2, "type": "Stop", "name": "A"},
//!     {"id": 3, "type": "Route", "from": "A", "to": "B"}
//!   ]
//! }
//! ```
//!
//! Unknown top-level keys (e.g. `render_settings`) are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use transit_core::RoutingSettings;

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRecord),
    Bus(BusRecord),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distance in metres from this stop to each named neighbour.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BusRecord {
    pub name: String,
    pub stops: Vec<String>,
    /// `true` for a circular line.
    pub is_roundtrip: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    /// Map rendering is not provided; answered with `"not found"`.
    Map { id: i64 },
    /// Any other request type.  Skipped without an answer.
    #[serde(other)]
    Unsupported,
}

impl StatRequest {
    pub fn id(&self) -> Option<i64> {
        match *self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => Some(id),
            StatRequest::Unsupported => None,
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

pub const NOT_FOUND: &str = "not found";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: f64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItem>,
    },
    NotFound {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound { request_id, error_message: NOT_FOUND.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u32, time: f64 },
}
