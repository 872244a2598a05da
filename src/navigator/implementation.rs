use log::{debug, info, warn};
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::geo::{distance, Coordinate};
use crate::navigator::definition::{Alert, AlertKind, AlertSink, Distances, SessionSnapshot};
use crate::trip::{SegmentChange, SegmentId, Service, ServiceId, TripError, TripSession};
use crate::Error;

/// Drives a [`TripSession`] from position fixes, reporting to an [`AlertSink`].
///
/// A navigator serves exactly one rider's session. Its methods take
/// `&mut self`, so fixes are applied one at a time in the order given.
#[derive(Debug)]
pub struct Navigator<S> {
    session: TripSession,
    sink: S,

    last_fix: Option<Coordinate>,
    distances: Option<Distances>,
}

impl<S> Navigator<S>
where
    S: AlertSink,
{
    pub fn new(sink: S) -> Self {
        Navigator {
            session: TripSession::new(),
            sink,
            last_fix: None,
            distances: None,
        }
    }

    /// Begins navigating `service` from its first segment.
    pub fn start_trip(&mut self, service: Service) -> Result<(), Error> {
        self.session.start_trip(service)?;
        self.last_fix = None;
        self.distances = None;

        Ok(())
    }

    /// Abandons the trip in progress, without finishing it.
    pub fn cancel_trip(&mut self) {
        self.session.reset();
        self.last_fix = None;
        self.distances = None;
    }

    /// Applies a single position fix.
    ///
    /// An invalid fix is rejected without touching the session. While an
    /// arrival alert awaits confirmation, or when no segment is active, the
    /// fix is ignored. Otherwise the current segment's hysteresis is run and
    /// at most one alert is raised, which is also returned. The "get ready"
    /// alert takes priority: when it fires, arrival is left for the next fix.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self), err(level = Level::INFO)))]
    pub fn on_position(&mut self, position: Coordinate) -> Result<Option<Alert>, Error> {
        position.validate()?;

        if self.session.is_waiting_for_confirm() {
            debug!("Awaiting arrival confirmation, ignoring {position:?}");
            return Ok(None);
        }

        let Some(service) = self.session.current_service_id() else {
            return Ok(None);
        };

        if let Some(previous) = self.last_fix.replace(position) {
            self.session.add_travelled(distance(&previous, &position));
        }

        let Some((segment, hysteresis)) = self.session.current_mut() else {
            return Ok(None);
        };

        let distances = Distances {
            to_approach: distance(&position, &segment.approach_point),
            to_final_stop: distance(&position, &segment.final_stop_point),
        };
        let segment = segment.id;

        let kind = if hysteresis.evaluate_pre_alert(distances.to_approach) {
            Some(AlertKind::Ready)
        } else if hysteresis.evaluate_arrival(distances.to_approach, position.speed_or_zero()) {
            Some(AlertKind::Arrival)
        } else {
            None
        };

        self.distances = Some(distances);

        let alert = kind.map(|kind| Alert {
            kind,
            service,
            segment,
            distance: distances.to_approach,
        });

        if let Some(alert) = alert {
            if alert.kind == AlertKind::Arrival {
                self.session.set_waiting_for_confirm(true);
            }

            debug!("Segment {segment}: {} at {:.0}m", alert.kind, alert.distance);
            self.sink.alert(alert);
        }

        Ok(alert)
    }

    /// Acknowledges the arrival alert, moving onto the next segment or
    /// finishing the trip after the last one.
    pub fn confirm_arrival(&mut self) -> Result<SegmentChange, Error> {
        if !self.session.is_waiting_for_confirm() {
            warn!("Confirming arrival without a pending arrival alert");
        }

        self.complete_segment()
    }

    /// Moves past the current segment without waiting for an arrival.
    pub fn skip_segment(&mut self) -> Result<SegmentChange, Error> {
        info!("Skipping segment {:?}", self.session.current_segment_id());
        self.complete_segment()
    }

    fn complete_segment(&mut self) -> Result<SegmentChange, Error> {
        if !self.session.is_active() {
            return Err(TripError::NoActiveTrip.into());
        }

        self.session.set_waiting_for_confirm(false);
        self.distances = None;

        let change = if self.session.has_more_segments() {
            self.session.advance()?
        } else {
            self.session
                .finish_trip()
                .ok_or(Error::Trip(TripError::NoActiveTrip))?
        };

        self.sink.segment_changed(change);
        Ok(change)
    }

    pub fn current_segment_id(&self) -> Option<SegmentId> {
        self.session.current_segment_id()
    }

    pub fn current_service_id(&self) -> Option<ServiceId> {
        self.session.current_service_id()
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn is_waiting_for_confirm(&self) -> bool {
        self.session.is_waiting_for_confirm()
    }

    pub fn recorded_distances(&self) -> &[f32] {
        self.session.recorded_distances()
    }

    /// Distances measured from the latest evaluated fix on the current segment.
    pub fn last_distances(&self) -> Option<Distances> {
        self.distances
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            service: self.current_service_id(),
            segment: self.current_segment_id(),
            index: self.current_index(),
            finished: self.is_finished(),
            waiting_for_confirm: self.is_waiting_for_confirm(),
            recorded_distances: self.recorded_distances().to_vec(),
            distances: self.distances,
        }
    }

    pub fn session(&self) -> &TripSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
