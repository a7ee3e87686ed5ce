use super::JourneyKey;
use geo::Point;

/// a location reached by the routing engine and the signed travel time to reach it.
/// negative durations come from inbound (reverse) searches, positive from outbound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Journey {
    location: Point<f64>,
    duration_minutes: f64,
}

impl Journey {
    pub fn new(latitude: f64, longitude: f64, duration_minutes: f64) -> Journey {
        Journey {
            location: Point::new(longitude, latitude),
            duration_minutes,
        }
    }

    /// builds a journey from a signed duration in seconds, keeping only the
    /// whole minutes (truncated toward zero).
    pub fn from_signed_seconds(latitude: f64, longitude: f64, duration_seconds: i64) -> Journey {
        let minutes = duration_seconds / 60;
        Journey::new(latitude, longitude, minutes as f64)
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }

    pub fn location(&self) -> &Point<f64> {
        &self.location
    }

    /// signed travel time in minutes
    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    /// value identity of this journey over (latitude, longitude, duration)
    pub fn key(&self) -> JourneyKey {
        JourneyKey::from(self)
    }
}
