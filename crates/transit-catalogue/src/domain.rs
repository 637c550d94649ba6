//! Catalogue entities.

use transit_core::{Coordinates, StopId};

/// A named point riders can board or alight at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
}

/// A named bus line: an ordered, non-empty list of stops.
///
/// A circular line is travelled exactly as listed.  A non-circular line goes
/// there and back: `S0 … Sn … S0`, visiting the turnaround stop `Sn` once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_circular: bool,
}

impl Line {
    /// Number of stop visits along the travelled path.
    pub fn stop_visits(&self) -> usize {
        self.travelled_stops().count()
    }

    /// Stops in the order a rider on this line passes them.
    ///
    /// For a non-circular line this is the forward list followed by the
    /// reversed list without its first element (the turnaround stop).
    pub fn travelled_stops(&self) -> impl Iterator<Item = StopId> + '_ {
        let back: &[StopId] = if self.is_circular || self.stops.is_empty() {
            &[]
        } else {
            &self.stops[..self.stops.len() - 1]
        };
        self.stops.iter().chain(back.iter().rev()).copied()
    }

    /// Consecutive `(from, to)` stop pairs of the listed (forward) order.
    pub fn forward_hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}
