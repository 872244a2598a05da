use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::error::GeoError;

pub type Degree = f64;

/// A single position fix, as delivered by a location source.
///
/// Coordinates are immutable once built. Use [`Coordinate::from_degree`]
/// to validate the latitude and longitude, and the `with_*` builders to
/// attach the optional speed (m/s) and observation time.
///
/// ```rust
/// use alight::geo::Coordinate;
///
/// let fix = Coordinate::from_degree(38.8895, -77.0353)
///     .expect("valid coordinate")
///     .with_speed(12.5);
///
/// println!("Position: {:?}", fix);
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: Degree,
    pub lng: Degree,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Coordinate {
    /// Constructs a validated coordinate from a `lat` and `lng` in degrees.
    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        let coordinate = Self::from_degree_unchecked(lat, lng);
        coordinate.validate()?;

        Ok(coordinate)
    }

    /// Constructs a coordinate without range checks. Coordinates built this
    /// way are rejected by [`Coordinate::validate`] when they reach a session.
    pub fn from_degree_unchecked(lat: Degree, lng: Degree) -> Self {
        Coordinate {
            lat,
            lng,
            speed: None,
            timestamp: None,
        }
    }

    pub fn with_speed(self, speed: f64) -> Self {
        Self {
            speed: Some(speed),
            ..self
        }
    }

    pub fn with_timestamp(self, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..self
        }
    }

    /// Checks the latitude lies within `[-90, 90]` and the
    /// longitude within `[-180, 180]`, both finite.
    pub fn validate(&self) -> Result<(), GeoError> {
        let lat_ok = self.lat.is_finite() && (-90f64..=90f64).contains(&self.lat);
        let lng_ok = self.lng.is_finite() && (-180f64..=180f64).contains(&self.lng);

        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }

    /// Speed over ground in m/s. A fix without speed reports `0.0`,
    /// matching how platform location providers fill the field.
    pub fn speed_or_zero(&self) -> f64 {
        self.speed.unwrap_or(0.0)
    }

    /// The position as a [`geo::Point`], in `(lng, lat)` order.
    pub fn point(&self) -> geo::Point {
        geo::Point::new(self.lng, self.lat)
    }
}

impl From<Coordinate> for geo::Point {
    fn from(value: Coordinate) -> Self {
        value.point()
    }
}

impl From<geo::Point> for Coordinate {
    fn from(value: geo::Point) -> Self {
        Coordinate::from_degree_unchecked(value.y(), value.x())
    }
}

impl Debug for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)?;
        if let Some(speed) = self.speed {
            write!(f, " @ {speed}m/s")?;
        }

        Ok(())
    }
}
