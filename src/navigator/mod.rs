//! Turns a stream of position fixes into rider alerts and segment progression.
//!
//! The [`Navigator`] is the single entry point for a rider's session. It
//! measures each fix against the current segment, runs the segment's
//! hysteresis, and reports alerts outward through an [`AlertSink`]. The
//! sink is a capability the host provides. The navigator never calls back
//! into its owner.
//!
//! Fixes for a session must be applied in the order they were observed.
//! With the `actor` feature, [`SessionHandle`] runs a navigator on its own
//! task and feeds it from a channel, which gives that ordering without locks.
//!
//! ```rust
//! use alight::navigator::{Alert, AlertKind, Navigator};
//! use alight::geo::Coordinate;
//! use alight::trip::{Segment, SegmentId, Service, ServiceId};
//!
//! let stop = Coordinate::from_degree(38.894975, -77.024286).unwrap();
//! let service = Service::new(ServiceId(1), [Segment {
//!     id: SegmentId(1),
//!     approach_point: stop,
//!     final_stop_point: stop,
//!     origin_point: stop,
//!     alert_distance: 100.0,
//! }]);
//!
//! let mut navigator = Navigator::new(Vec::<Alert>::new());
//! navigator.start_trip(service).unwrap();
//!
//! let alert = navigator.on_position(stop.with_speed(20.0)).unwrap();
//! assert_eq!(alert.map(|alert| alert.kind), Some(AlertKind::Ready));
//!
//! let alert = navigator.on_position(stop.with_speed(20.0)).unwrap();
//! assert_eq!(alert.map(|alert| alert.kind), Some(AlertKind::Arrival));
//!
//! navigator.confirm_arrival().unwrap();
//! assert!(navigator.is_finished());
//! ```

#[doc(hidden)]
#[cfg(feature = "actor")]
pub mod actor;
#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod implementation;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
#[cfg(feature = "actor")]
pub use actor::SessionHandle;
#[doc(inline)]
pub use definition::*;
#[doc(inline)]
pub use implementation::Navigator;
