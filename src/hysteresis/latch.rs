use bitflags::bitflags;

bitflags! {
    /// The one-shot latches of a single segment.
    ///
    /// Band latches are strictly ordered approach to departure. `READY`
    /// and `TRIGGERED` gate the two alerts so each fires once per segment.
    /// The whole set is cleared atomically when a new segment is loaded.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Latches: u8 {
        const APPROACH_100 = 1 << 0;
        const APPROACH_50 = 1 << 1;
        const APPROACH_20 = 1 << 2;
        const DEPARTURE_20 = 1 << 3;
        const DEPARTURE_50 = 1 << 4;
        // Carried for completeness, no band of the decision table sets it.
        const DEPARTURE_100 = 1 << 5;

        const READY = 1 << 6;
        const TRIGGERED = 1 << 7;
    }
}

impl Latches {
    /// Only the six distance-band latches.
    pub const BANDS: Latches = Latches::APPROACH_100
        .union(Latches::APPROACH_50)
        .union(Latches::APPROACH_20)
        .union(Latches::DEPARTURE_20)
        .union(Latches::DEPARTURE_50)
        .union(Latches::DEPARTURE_100);

    pub fn bands(&self) -> Latches {
        self.intersection(Latches::BANDS)
    }
}
