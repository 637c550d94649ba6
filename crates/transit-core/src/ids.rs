//! Strongly typed, zero-cost identifier wrappers.
//!
//! Stops and lines live in append-only arenas inside the catalogue; graph
//! vertices and edges are allocated densely by the routing graph builder.
//! Every id is therefore a plain slot index that stays valid for the lifetime
//! of its owner.  Prefer the `.index()` helper over `id.0 as usize`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Slot of a stop in the catalogue's stop arena.
    pub struct StopId(u32);
}

typed_id! {
    /// Slot of a line (bus route) in the catalogue's line arena.
    pub struct LineId(u32);
}

typed_id! {
    /// Vertex of the routing graph.  Two per stop: arrival and departure.
    pub struct VertexId(u32);
}

typed_id! {
    /// Directed edge of the routing graph, in insertion order.
    pub struct EdgeId(u32);
}
