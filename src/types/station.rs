//! Defines the weather station record returned by the station directory,
//! including the passthrough metadata and the computed distance from the
//! query point.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// --- Data Structures ---

/// A weather station as listed by the station directory.
///
/// Only the identifier and the coordinates are interpreted. Every other key the
/// directory sends is kept in [`Station::metadata`] and written back unchanged
/// when the station is serialized.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    /// The WMO station code (e.g., "724080"). Numeric codes are stored as text.
    #[serde(deserialize_with = "string_or_number")]
    pub wmo: String,
    /// Latitude in decimal degrees, as sent by the directory.
    pub lat: Scalar,
    /// Longitude in decimal degrees, as sent by the directory.
    pub long: Scalar,
    /// Distance from the query point in whole kilometers, rounded up.
    ///
    /// Set by the station locator; never read from the directory payload.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    /// All remaining directory fields, passed through as-is.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Station {
    /// Attaches the computed distance, replacing any `distance` key the
    /// directory may have sent in the metadata.
    pub fn with_distance(mut self, distance_km: u32) -> Self {
        self.metadata.remove("distance");
        self.distance = Some(distance_km);
        self
    }
}

/// A string or number field kept in the JSON form the directory sent it in,
/// so it serializes back unchanged.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Scalar(Value);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            value @ (Value::String(_) | Value::Number(_)) => Ok(Scalar(value)),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or a number, found {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Directory response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct StationDirectory {
    pub meteo_stations: Vec<Station>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or a number, found {}",
            other
        ))),
    }
}
