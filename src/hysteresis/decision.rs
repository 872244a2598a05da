use crate::hysteresis::latch::Latches;
use crate::hysteresis::{INNER_BAND, MIDDLE_BAND, MOVING_SPEED, OUTER_BAND, STOPPING_SPEED};

/// The band crossing a single evaluation latched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Crossing {
    /// `50 < d < 100`, entering the outer band.
    Approach100,
    /// `20 < d < 50`, entering the middle band.
    Approach50,
    /// `d < 20`, first fix within the inner band.
    Approach20,
    /// `d < 20`, a second fix within the inner band.
    Departure20,
    /// `20 < d < 50`, leaving through the middle band after the inner band.
    Departure50,
}

impl Crossing {
    pub fn latch(&self) -> Latches {
        match self {
            Crossing::Approach100 => Latches::APPROACH_100,
            Crossing::Approach50 => Latches::APPROACH_50,
            Crossing::Approach20 => Latches::APPROACH_20,
            Crossing::Departure20 => Latches::DEPARTURE_20,
            Crossing::Departure50 => Latches::DEPARTURE_50,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Verdict {
    /// The rider should alight.
    Alert,
    /// No alert for this crossing.
    Silent,
    /// The inner band was re-entered at a speed between the stopping and
    /// moving thresholds. The latch is spent, but no call is made either way.
    Undecided,
}

/// The outcome of a single [`decide`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// The crossing latched by this call, if any band matched.
    pub crossing: Option<Crossing>,
    pub verdict: Verdict,
}

impl Decision {
    const NONE: Decision = Decision {
        crossing: None,
        verdict: Verdict::Silent,
    };

    fn latched(crossing: Crossing, verdict: Verdict) -> Self {
        Decision {
            crossing: Some(crossing),
            verdict,
        }
    }

    pub fn is_alert(&self) -> bool {
        self.verdict == Verdict::Alert
    }
}

/// Evaluates the band/speed decision table for one sample.
///
/// `distance` is the distance (m) to the segment's approach point and
/// `speed` is in m/s. Cases are tried top to bottom and only the first
/// matching, not-yet-latched case applies:
///
/// | Case | Condition                                  | Latch          | Verdict                          |
/// |------|--------------------------------------------|----------------|----------------------------------|
/// | 1    | `50 < d < 100`                             | `APPROACH_100` | silent                           |
/// | 2    | `20 < d < 50`                              | `APPROACH_50`  | silent                           |
/// | 3    | `d < 20`                                   | `APPROACH_20`  | alert iff `speed > 15`           |
/// | 4    | `d < 20`, after `APPROACH_20`              | `DEPARTURE_20` | alert iff `speed > 15`, silent iff `speed < 10` |
/// | 5    | `20 < d < 50`, after the inner band        | `DEPARTURE_50` | alert                            |
///
/// Returns the updated latch set, which only ever gains the latch of the
/// matched case. Non-band latches are passed through untouched.
pub fn decide(latches: Latches, distance: f64, speed: f64) -> (Latches, Decision) {
    let outer = distance > MIDDLE_BAND && distance < OUTER_BAND;
    let middle = distance > INNER_BAND && distance < MIDDLE_BAND;
    let inner = distance < INNER_BAND;

    let decision = if outer && !latches.contains(Latches::APPROACH_100) {
        Decision::latched(Crossing::Approach100, Verdict::Silent)
    } else if middle && !latches.contains(Latches::APPROACH_50) {
        Decision::latched(Crossing::Approach50, Verdict::Silent)
    } else if inner && !latches.contains(Latches::APPROACH_20) {
        let verdict = if speed > MOVING_SPEED {
            Verdict::Alert
        } else {
            Verdict::Silent
        };

        Decision::latched(Crossing::Approach20, verdict)
    } else if inner && !latches.contains(Latches::DEPARTURE_20) {
        let verdict = if speed > MOVING_SPEED {
            Verdict::Alert
        } else if speed < STOPPING_SPEED {
            Verdict::Silent
        } else {
            Verdict::Undecided
        };

        Decision::latched(Crossing::Departure20, verdict)
    } else if middle
        && !latches.contains(Latches::DEPARTURE_50)
        && latches.intersects(Latches::APPROACH_20 | Latches::DEPARTURE_20)
    {
        Decision::latched(Crossing::Departure50, Verdict::Alert)
    } else {
        Decision::NONE
    };

    let latches = match decision.crossing {
        Some(crossing) => latches | crossing.latch(),
        None => latches,
    };

    (latches, decision)
}
