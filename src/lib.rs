#![doc = include_str!("../README.md")]

pub mod geo;
pub mod hysteresis;
pub mod navigator;
pub mod trip;
pub mod util;

use std::fmt::{Display, Formatter};

#[doc(inline)]
pub use crate::geo::{Coordinate, GeoError};
#[doc(inline)]
pub use hysteresis::SegmentHysteresis;
#[doc(inline)]
pub use navigator::{Alert, AlertKind, AlertSink, Navigator};
#[cfg(feature = "actor")]
#[doc(inline)]
pub use navigator::SessionHandle;
#[doc(inline)]
pub use trip::{Segment, Service, TripError, TripSession};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Geo(GeoError),
    Trip(TripError),
    /// The session actor has stopped and can no longer take commands.
    SessionClosed,
}

crate::impl_err!(GeoError, Geo);
crate::impl_err!(TripError, Trip);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Geo(err) => write!(f, "{err}"),
            Error::Trip(err) => write!(f, "{err}"),
            Error::SessionClosed => write!(f, "session has closed"),
        }
    }
}

impl std::error::Error for Error {}
