//! Synthetic trips shared by the unit tests.

use geo::{Destination, Haversine};

use crate::geo::Coordinate;
use crate::trip::{Segment, SegmentId, Service, ServiceId};

/// Approach points of the fixture segments, along Pennsylvania Ave NW.
pub const APPROACH_POINTS: [(f64, f64); 3] = [
    (38.894975, -77.024286),
    (38.896470, -77.036612),
    (38.898900, -77.042850),
];

/// Spacing (m) between a segment's approach point and its final stop.
pub const FINAL_STOP_SPACING: f64 = 300.0;

pub fn segment(id: u64, approach: (f64, f64)) -> Segment {
    let approach_point = Coordinate::from_degree(approach.0, approach.1).unwrap();

    Segment {
        id: SegmentId(id),
        approach_point,
        final_stop_point: offset(&approach_point, 0.0, FINAL_STOP_SPACING),
        origin_point: offset(&approach_point, 180.0, 2_000.0),
        alert_distance: 100.0,
    }
}

/// A service of `count` segments (at most three), with ids `10, 11, ..`.
pub fn service(count: usize) -> Service {
    Service::new(
        ServiceId(42),
        APPROACH_POINTS
            .iter()
            .take(count)
            .enumerate()
            .map(|(idx, approach)| segment(10 + idx as u64, *approach)),
    )
}

/// The coordinate `distance` meters from `origin` along `bearing` (degrees from north).
pub fn offset(origin: &Coordinate, bearing: f64, distance: f64) -> Coordinate {
    Coordinate::from(Haversine.destination(origin.point(), bearing, distance))
}

/// A fix `distance` meters south of the segment's approach point, travelling at `speed`.
pub fn fix(segment: &Segment, distance: f64, speed: f64) -> Coordinate {
    offset(&segment.approach_point, 180.0, distance).with_speed(speed)
}
