//! Typed itinerary steps.

use transit_core::{LineId, Minutes, StopId};

/// One element of a route result.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteStep {
    /// Wait at `stop` before boarding.
    Wait { stop: StopId, time: Minutes },
    /// Ride `line` for `span_count` consecutive hops without changing.
    Ride { line: LineId, span_count: u32, time: Minutes },
}

impl RouteStep {
    #[inline]
    pub fn time(&self) -> Minutes {
        match *self {
            RouteStep::Wait { time, .. } | RouteStep::Ride { time, .. } => time,
        }
    }
}

/// The fastest way from one stop to another.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Sum of all step times, in minutes.
    pub total_time: Minutes,
    /// Steps in travel order.
    pub steps: Vec<RouteStep>,
}
