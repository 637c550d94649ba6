//! Geographic coordinate type and great-circle distance.
//!
//! Coordinates are double precision: line lengths are sums over many
//! stop-to-stop hops and the curvature ratio is reported to the client, so
//! the extra mantissa bits are worth the memory.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in metres (spherical law of cosines).
    ///
    /// Identical points return exactly `0.0`.  The cosine is clamped to
    /// `[-1, 1]` so rounding never produces `NaN` for near-identical points.
    pub fn distance_m(self, other: Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lng = (self.lng - other.lng).abs().to_radians();

        let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lng.cos();
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
