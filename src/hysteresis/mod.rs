//! Approach/departure hysteresis for a single segment.
//!
//! A segment is tracked against its *approach point*, the stop before the
//! rider's stop. As fixes arrive, the distance to that point falls through
//! three bands (100m, 50m, 20m) and, once passed, climbs back out. Each band
//! crossing is a one-shot latch, so a fix oscillating around a radius under
//! GPS noise cannot fire the same crossing twice.
//!
//! The decision itself is the pure function [`decide`], which maps
//! `(latches, distance, speed)` onto the next latch set and a [`Decision`].
//! [`SegmentHysteresis`] wraps it with the per-segment `ready` and
//! `triggered` one-shots.
//!
//! ```rust
//! use alight::hysteresis::SegmentHysteresis;
//!
//! let mut hysteresis = SegmentHysteresis::new();
//!
//! // Get ready, once.
//! assert!(hysteresis.evaluate_pre_alert(240.0));
//! assert!(!hysteresis.evaluate_pre_alert(120.0));
//!
//! // Closing in at speed, alert on the 20m band.
//! assert!(!hysteresis.evaluate_arrival(80.0, 20.0));
//! assert!(!hysteresis.evaluate_arrival(40.0, 20.0));
//! assert!(hysteresis.evaluate_arrival(15.0, 20.0));
//! ```

/// Radius (m) under which the "get ready" alert fires.
pub const PRE_ALERT_RADIUS: f64 = 250.0;

/// Outer, middle and inner band edges (m) around the approach point.
pub const OUTER_BAND: f64 = 100.0;
pub const MIDDLE_BAND: f64 = 50.0;
pub const INNER_BAND: f64 = 20.0;

/// Above this speed the vehicle is considered to be moving through a band.
pub const MOVING_SPEED: f64 = 15.0;
/// Below this speed the vehicle is considered to be pulling in.
pub const STOPPING_SPEED: f64 = 10.0;

#[doc(hidden)]
pub mod decision;
#[doc(hidden)]
pub mod latch;
#[doc(hidden)]
pub mod segment;

#[doc(inline)]
pub use decision::{decide, Crossing, Decision, Verdict};
#[doc(inline)]
pub use latch::Latches;
#[doc(inline)]
pub use segment::SegmentHysteresis;
