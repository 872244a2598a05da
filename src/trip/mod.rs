//! Trip data and the session which walks it.
//!
//! A [`Service`] is the ordered list of [`Segment`]s a rider will travel,
//! supplied already parsed by a trip-data provider. A [`TripSession`] holds
//! the service being ridden, the current segment index, the distances
//! recorded for completed segments, and the [`SegmentHysteresis`] of the
//! current segment.
//!
//! The session moves through `IDLE -> ACTIVE(0) -> .. -> ACTIVE(n-1) -> FINISHED`.
//! The only way to move from one segment to the next is [`TripSession::advance`].
//!
//! [`SegmentHysteresis`]: crate::hysteresis::SegmentHysteresis

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod model;
#[doc(hidden)]
pub mod session;

#[doc(inline)]
pub use error::TripError;
#[doc(inline)]
pub use model::{Segment, SegmentChange, SegmentId, Service, ServiceId};
#[doc(inline)]
pub use session::TripSession;
