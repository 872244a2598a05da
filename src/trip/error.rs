use std::fmt::{Display, Formatter};

use crate::geo::GeoError;
use crate::trip::model::{SegmentId, ServiceId};

#[derive(Debug, Clone, PartialEq)]
pub enum TripError {
    /// A trip was started on a service with no segments.
    EmptyService(ServiceId),
    /// A segment of the service carries a reference point outside of the valid range.
    InvalidSegment(SegmentId, GeoError),
    /// The session has no service to advance through.
    NoActiveTrip,
    /// The current segment is the last of the service.
    NoMoreSegments,
}

impl Display for TripError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TripError::EmptyService(service) => write!(f, "service {service} has no segments"),
            TripError::InvalidSegment(segment, err) => write!(f, "segment {segment}: {err}"),
            TripError::NoActiveTrip => write!(f, "no trip is active"),
            TripError::NoMoreSegments => write!(f, "no segments remain in the active trip"),
        }
    }
}
