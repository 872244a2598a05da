//! Great-circle distance between two [`Coordinate`]s.
//!
//! All distances are returned in meters and computed with the
//! Haversine formula over the mean earth radius, which is well
//! inside the accuracy of a consumer GPS fix at stop-level ranges.
//!
//! ```rust
//! use alight::geo::{distance, Coordinate};
//!
//! let a = Coordinate::from_degree(-33.8688, 151.2093).unwrap();
//! let b = Coordinate::from_degree(-33.8700, 151.2093).unwrap();
//!
//! assert!(distance(&a, &b) > 100.0);
//! ```

pub const MEAN_EARTH_RADIUS: f64 = 6371008.8;

#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use coord::Coordinate;
#[doc(inline)]
pub use error::GeoError;

use geo::{Distance, Haversine};

/// Returns the great-circle distance between `a` and `b`, in meters.
///
/// The result is symmetric, non-negative and exactly zero for
/// identical coordinates. Both coordinates are assumed to have been
/// validated on construction, see [`Coordinate::from_degree`].
#[inline]
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    Haversine.distance(a.point(), b.point())
}
