use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, GeoError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u64);

impl Display for SegmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Display for ServiceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One ride from a boarding stop to an alighting stop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,

    /// The stop before the alighting stop. All band crossings are
    /// measured against this point.
    pub approach_point: Coordinate,

    /// The alighting stop of the segment.
    pub final_stop_point: Coordinate,

    /// The boarding stop. Kept for reference only.
    pub origin_point: Coordinate,

    /// Pre-alert radius (m) configured for the segment.
    ///
    /// Not consulted when deciding alerts, the fixed
    /// [`PRE_ALERT_RADIUS`](crate::hysteresis::PRE_ALERT_RADIUS) is.
    pub alert_distance: f64,
}

impl Segment {
    pub fn validate(&self) -> Result<(), GeoError> {
        self.approach_point.validate()?;
        self.final_stop_point.validate()?;
        self.origin_point.validate()
    }
}

/// A transit service: the segments of a trip in ride order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub segments: Vec<Segment>,
}

impl Service {
    pub fn new(id: ServiceId, segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            id,
            segments: segments.into_iter().collect(),
        }
    }
}

/// Describes a segment completing, either onto the next
/// segment or as the end of the trip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentChange {
    pub service: ServiceId,
    pub completed: SegmentId,
    /// `None` when the completed segment was the last of the service.
    pub next: Option<SegmentId>,
    /// Distance (m) recorded for the completed segment.
    pub distance: f32,
}
