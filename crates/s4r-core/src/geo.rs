//! Geographic coordinate type.
//!
//! `GeoPoint` uses `f64` latitude/longitude. Full double precision is kept
//! here because coordinates are round-tripped through persistence verbatim
//! and are never used in a latency-sensitive inner loop (no spatial index
//! queries them).

/// A geographic coordinate, round-tripped verbatim through persistence.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
