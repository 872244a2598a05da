use log::debug;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::hysteresis::decision::{decide, Decision};
use crate::hysteresis::latch::Latches;
use crate::hysteresis::PRE_ALERT_RADIUS;

/// Alert state for the segment currently being ridden.
///
/// A fresh instance is created whenever a segment becomes current and is
/// dropped once that segment completes, so no latch can leak from one stop
/// into the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentHysteresis {
    latches: Latches,
}

impl SegmentHysteresis {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current latch set, including the `READY` and `TRIGGERED` one-shots.
    pub fn latches(&self) -> Latches {
        self.latches
    }

    pub fn ready_fired(&self) -> bool {
        self.latches.contains(Latches::READY)
    }

    pub fn triggered(&self) -> bool {
        self.latches.contains(Latches::TRIGGERED)
    }

    /// Returns `true` exactly once per segment: the first time the approach
    /// point is closer than [`PRE_ALERT_RADIUS`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    pub fn evaluate_pre_alert(&mut self, distance_to_approach: f64) -> bool {
        if distance_to_approach < PRE_ALERT_RADIUS && !self.ready_fired() {
            self.latches.insert(Latches::READY);
            debug!("Pre-alert radius entered at {distance_to_approach:.1}m");
            return true;
        }

        false
    }

    /// Runs the band decision table for one sample, returning `true` at most
    /// once per segment.
    ///
    /// Band latches advance even after the arrival alert has been raised,
    /// the `TRIGGERED` one-shot only suppresses a repeated alert.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    pub fn evaluate_arrival(&mut self, distance_to_approach: f64, speed: f64) -> bool {
        let decision = self.step(distance_to_approach, speed);

        if decision.is_alert() && !self.triggered() {
            self.latches.insert(Latches::TRIGGERED);
            return true;
        }

        false
    }

    /// Applies [`decide`] to the held latches and returns the raw decision.
    pub fn step(&mut self, distance_to_approach: f64, speed: f64) -> Decision {
        let (latches, decision) = decide(self.latches, distance_to_approach, speed);
        self.latches = latches;

        if let Some(crossing) = decision.crossing {
            debug!(
                "Crossed {crossing} at {distance_to_approach:.1}m, {speed:.1}m/s: {}",
                decision.verdict
            );
        }

        decision
    }

    /// Clears every latch, including `READY` and `TRIGGERED`.
    pub fn reset_for_new_segment(&mut self) {
        self.latches = Latches::empty();
    }
}
