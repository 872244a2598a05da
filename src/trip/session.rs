use log::{debug, info, warn};
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::hysteresis::SegmentHysteresis;
use crate::trip::error::TripError;
use crate::trip::model::{Segment, SegmentChange, SegmentId, Service, ServiceId};

/// Progress through a single rider's trip.
///
/// The session exclusively owns the active [`Service`] and the
/// [`SegmentHysteresis`] of its current segment.
///
/// ```rust
/// use alight::geo::Coordinate;
/// use alight::trip::{Segment, SegmentId, Service, ServiceId, TripSession};
///
/// let stop = Coordinate::from_degree(38.8895, -77.0353).unwrap();
/// let segment = |id| Segment {
///     id: SegmentId(id),
///     approach_point: stop,
///     final_stop_point: stop,
///     origin_point: stop,
///     alert_distance: 100.0,
/// };
///
/// let mut session = TripSession::new();
/// session
///     .start_trip(Service::new(ServiceId(7), [segment(1), segment(2)]))
///     .expect("service has segments");
///
/// assert_eq!(session.current_segment_id(), Some(SegmentId(1)));
/// session.advance().expect("a second segment remains");
/// assert_eq!(session.current_segment_id(), Some(SegmentId(2)));
/// assert!(!session.has_more_segments());
/// ```
#[derive(Debug, Default)]
pub struct TripSession {
    service: Option<Service>,
    index: usize,
    hysteresis: Option<SegmentHysteresis>,

    /// Distance travelled (m) on the current segment so far.
    travelled: f64,
    recorded: Vec<f32>,

    finished: bool,
    waiting_for_confirm: bool,
}

impl TripSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts navigating `service` from its first segment, replacing any
    /// trip in progress. On failure the session is left untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip_all, fields(service = %service.id)))]
    pub fn start_trip(&mut self, service: Service) -> Result<(), TripError> {
        if service.segments.is_empty() {
            return Err(TripError::EmptyService(service.id));
        }

        if let Some((segment, err)) = service
            .segments
            .iter()
            .find_map(|segment| segment.validate().err().map(|err| (segment.id, err)))
        {
            return Err(TripError::InvalidSegment(segment, err));
        }

        info!(
            "Starting trip on service {} with {} segment(s)",
            service.id,
            service.segments.len()
        );

        self.recorded = Vec::with_capacity(service.segments.len());
        self.service = Some(service);
        self.finished = false;
        self.load(0);

        Ok(())
    }

    /// Whether a segment remains after the current one.
    pub fn has_more_segments(&self) -> bool {
        self.service
            .as_ref()
            .is_some_and(|service| self.index + 1 < service.segments.len())
    }

    /// Completes the current segment and moves onto the next.
    ///
    /// The distance travelled on the completed segment is appended to the
    /// recorded distances, and the next segment starts with fresh hysteresis.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self), err(level = Level::INFO)))]
    pub fn advance(&mut self) -> Result<SegmentChange, TripError> {
        let Some(service) = self.service.as_ref() else {
            return Err(TripError::NoActiveTrip);
        };

        if !self.has_more_segments() {
            return Err(TripError::NoMoreSegments);
        }

        let service_id = service.id;
        let completed = service.segments[self.index].id;
        let next = service.segments[self.index + 1].id;

        let distance = self.complete_segment();
        self.load(self.index + 1);

        info!("Advanced from segment {completed} to {next} ({distance:.0}m travelled)");

        Ok(SegmentChange {
            service: service_id,
            completed,
            next: Some(next),
            distance,
        })
    }

    /// Ends the trip. The current segment's travelled distance is recorded,
    /// and the service released.
    ///
    /// Returns the completed segment, or `None` if no segment was active.
    /// Calling this again once finished does nothing.
    pub fn finish_trip(&mut self) -> Option<SegmentChange> {
        if self.finished {
            return None;
        }

        let change = self.service.as_ref().map(|service| (service.id, service.segments[self.index].id));
        let change = change.map(|(service, completed)| SegmentChange {
            service,
            completed,
            next: None,
            distance: self.complete_segment(),
        });

        info!("Trip finished after {} segment(s)", self.recorded.len());

        self.finished = true;
        self.release();

        change
    }

    /// Stops navigating without finishing the trip, returning to idle.
    pub fn reset(&mut self) {
        if let Some(service) = &self.service {
            info!("Abandoning trip on service {}", service.id);
        }

        self.finished = false;
        self.recorded.clear();
        self.release();
    }

    /// Appends a distance to the recorded distances.
    ///
    /// Distances beyond one per segment of the active service are dropped.
    pub fn record_distance(&mut self, distance: f32) {
        match &self.service {
            Some(service) if self.recorded.len() < service.segments.len() => {
                self.recorded.push(distance);
            }
            Some(_) => warn!("Dropping distance {distance}, every segment is already recorded"),
            None => warn!("Dropping distance {distance}, no trip is active"),
        }
    }

    /// Adds `meters` to the distance travelled on the current segment.
    pub fn add_travelled(&mut self, meters: f64) {
        if self.service.is_some() {
            self.travelled += meters;
        }
    }

    pub fn travelled(&self) -> f64 {
        self.travelled
    }

    pub fn current_segment(&self) -> Option<&Segment> {
        self.service
            .as_ref()
            .and_then(|service| service.segments.get(self.index))
    }

    pub fn current_segment_id(&self) -> Option<SegmentId> {
        self.current_segment().map(|segment| segment.id)
    }

    pub fn current_service_id(&self) -> Option<ServiceId> {
        self.service.as_ref().map(|service| service.id)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.service.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn recorded_distances(&self) -> &[f32] {
        &self.recorded
    }

    pub fn is_waiting_for_confirm(&self) -> bool {
        self.waiting_for_confirm
    }

    pub fn set_waiting_for_confirm(&mut self, waiting: bool) {
        self.waiting_for_confirm = waiting;
    }

    pub fn hysteresis(&self) -> Option<&SegmentHysteresis> {
        self.hysteresis.as_ref()
    }

    /// The current segment alongside its hysteresis, when a segment is active.
    pub fn current_mut(&mut self) -> Option<(&Segment, &mut SegmentHysteresis)> {
        let segment = self.service.as_ref()?.segments.get(self.index)?;
        let hysteresis = self.hysteresis.as_mut()?;

        Some((segment, hysteresis))
    }

    fn load(&mut self, index: usize) {
        self.index = index;
        self.travelled = 0.0;
        self.waiting_for_confirm = false;

        let mut hysteresis = SegmentHysteresis::new();
        hysteresis.reset_for_new_segment();
        self.hysteresis = Some(hysteresis);

        if let Some(segment) = self.current_segment() {
            debug!(
                "Loaded segment {} (index {index}), approach {:?}, final stop {:?}, origin {:?}",
                segment.id, segment.approach_point, segment.final_stop_point, segment.origin_point
            );
        }
    }

    fn complete_segment(&mut self) -> f32 {
        let distance = self.travelled as f32;
        self.record_distance(distance);
        self.travelled = 0.0;

        distance
    }

    fn release(&mut self) {
        self.service = None;
        self.hysteresis = None;
        self.index = 0;
        self.travelled = 0.0;
        self.waiting_for_confirm = false;
    }
}
