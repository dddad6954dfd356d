use crate::payload::{Fields, FromPayload, ValidationError, deserialize_from_payload};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single GPS fix reported by the tracker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Position {
    lat: f64,
    lng: f64,
    accuracy: i64, // In meters
    timestamp: Option<String>,
}

impl Position {
    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn accuracy(&self) -> i64 {
        self.accuracy
    }

    /// The timestamp exactly as the service reported it.
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// The timestamp as an instant, or `None` when it is missing or not RFC 3339.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .as_deref()
            .and_then(|timestamp| DateTime::parse_from_rfc3339(timestamp).ok())
            .map(|timestamp| timestamp.with_timezone(&Utc))
    }
}

impl FromPayload for Position {
    const ENTITY: &'static str = "Position";

    fn from_payload(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(Position {
            lat: fields.required("lat")?,
            lng: fields.required("lng")?,
            accuracy: fields.required("accuracy")?,
            timestamp: fields.optional("timestamp")?,
        })
    }
}

deserialize_from_payload! { Position }
