use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoError {
    /// The latitude or longitude lies outside of the valid
    /// degree range, or is not a finite number.
    InvalidCoordinate { lat: f64, lng: f64 },
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidCoordinate { lat, lng } => write!(
                f,
                "invalid coordinate (lat: {lat}, lng: {lng}), expected lat in [-90, 90] and lng in [-180, 180]"
            ),
        }
    }
}
