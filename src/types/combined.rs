use crate::types::extreme_values::ExtremeValues;
use crate::types::station::Station;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A station joined with its extreme design values.
///
/// Serializes as a single flat JSON object holding every station key and every
/// extreme-value key. When both sides carry the same key, the extreme-value
/// side wins.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRecord {
    pub station: Station,
    pub extremes: ExtremeValues,
}

impl Serialize for CombinedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut merged = into_object(&self.station).map_err(S::Error::custom)?;
        merged.extend(into_object(&self.extremes).map_err(S::Error::custom)?);
        merged.serialize(serializer)
    }
}

fn into_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde_json::Error::custom(format!(
            "expected a JSON object, found {}",
            other
        ))),
    }
}
