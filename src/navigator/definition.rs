use log::info;
use serde::Serialize;

use crate::trip::{SegmentChange, SegmentId, ServiceId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
pub enum AlertKind {
    /// The rider should get ready to alight.
    #[strum(serialize = "get ready")]
    Ready,
    /// The rider should pull the cord, this is their stop.
    #[strum(serialize = "pull the cord")]
    Arrival,
}

/// A symbolic alert for the rider, rendered by an [`AlertSink`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub service: ServiceId,
    pub segment: SegmentId,
    /// Distance (m) to the segment's approach point when the alert fired.
    pub distance: f64,
}

/// Live distances (m) from the latest evaluated fix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Distances {
    pub to_approach: f64,
    pub to_final_stop: f64,
}

/// A point-in-time view of a session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub service: Option<ServiceId>,
    pub segment: Option<SegmentId>,
    pub index: usize,
    pub finished: bool,
    pub waiting_for_confirm: bool,
    pub recorded_distances: Vec<f32>,
    pub distances: Option<Distances>,
}

/// Receives the alerts and segment changes of a session.
///
/// Implementations render the alert (speech, notification, ...) and must
/// not block, as they are invoked from within position processing. At most
/// one alert is delivered per position.
pub trait AlertSink {
    fn alert(&mut self, alert: Alert);

    /// Invoked when a segment completes, either onto
    /// the next segment or as the end of the trip.
    fn segment_changed(&mut self, _change: SegmentChange) {}
}

/// Collects every alert, in order.
impl AlertSink for Vec<Alert> {
    fn alert(&mut self, alert: Alert) {
        self.push(alert);
    }
}

/// Writes alerts and segment changes to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl AlertSink for LogSink {
    fn alert(&mut self, alert: Alert) {
        info!(
            "[{}] Segment {}: {} ({:.0}m to approach)",
            alert.service, alert.segment, alert.kind, alert.distance
        );
    }

    fn segment_changed(&mut self, change: SegmentChange) {
        match change.next {
            Some(next) => info!(
                "[{}] Segment {} complete ({:.0}m), now riding {next}",
                change.service, change.completed, change.distance
            ),
            None => info!(
                "[{}] Segment {} complete ({:.0}m), trip finished",
                change.service, change.completed, change.distance
            ),
        }
    }
}

/// Forwards alerts onto a channel, for hosts rendering them on another task.
#[cfg(feature = "actor")]
impl AlertSink for tokio::sync::mpsc::UnboundedSender<Alert> {
    fn alert(&mut self, alert: Alert) {
        if self.send(alert).is_err() {
            log::warn!("Alert receiver dropped, discarding {} alert", alert.kind);
        }
    }
}
