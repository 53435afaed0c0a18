//! Positional extraction of a single record candidate.
//!
//! We never look at field names: slot 0 is latitude, slot 1 is longitude and slot 2, if any,
//! is altitude.  Anything after that (identifiers, etc.) is ignored.
//!

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;
use thiserror::Error;
use tracing::trace;

/// JSON type of a value, used in diagnostics.
///
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl From<&Value> for JsonKind {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

/// Why a candidate was rejected.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CandidateError {
    #[error("candidate is a {0}, not positional")]
    NotPositional(JsonKind),
    #[error("only {0} slot(s), need at least 2")]
    TooShort(usize),
    #[error("missing latitude")]
    MissingLatitude,
    #[error("missing longitude")]
    MissingLongitude,
    #[error("slot {slot} is a {kind}, not a number")]
    NotNumeric { slot: usize, kind: JsonKind },
}

/// Latitude, longitude & optional altitude extracted from one candidate.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct CoordinateTriple {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Altitude, unit is whatever the site sends
    pub alt: Option<f64>,
}

impl CoordinateTriple {
    pub fn new(lat: f64, lon: f64, alt: Option<f64>) -> Self {
        CoordinateTriple { lat, lon, alt }
    }

    /// Extract a triple from a candidate without ever panicking.
    ///
    pub fn extract(candidate: &Value) -> Result<Self, CandidateError> {
        let slots = match candidate {
            Value::Array(slots) => slots,
            other => return Err(CandidateError::NotPositional(other.into())),
        };
        if slots.len() < 2 {
            return Err(CandidateError::TooShort(slots.len()));
        }

        let lat = required(&slots[0], 0, CandidateError::MissingLatitude)?;
        let lon = required(&slots[1], 1, CandidateError::MissingLongitude)?;

        let alt = match slots.get(2) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                trace!("altitude is a {}, ignored", JsonKind::from(other));
                None
            }
        };
        Ok(CoordinateTriple { lat, lon, alt })
    }
}

/// Mandatory numeric slot.
///
fn required(value: &Value, slot: usize, missing: CandidateError) -> Result<f64, CandidateError> {
    match value {
        Value::Null => Err(missing),
        Value::Number(n) => n.as_f64().ok_or(CandidateError::NotNumeric {
            slot,
            kind: JsonKind::Number,
        }),
        other => Err(CandidateError::NotNumeric {
            slot,
            kind: other.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_full() {
        let t = CoordinateTriple::extract(&json!([10.0, 20.0, 1500])).unwrap();
        assert_eq!(CoordinateTriple::new(10.0, 20.0, Some(1500.0)), t);
    }

    #[rstest]
    #[case(json!([10.0, 20.0]))]
    #[case(json!([10.0, 20.0, null]))]
    #[case(json!([10.0, 20.0, "high"]))]
    fn test_extract_no_altitude(#[case] candidate: Value) {
        let t = CoordinateTriple::extract(&candidate).unwrap();
        assert_eq!(CoordinateTriple::new(10.0, 20.0, None), t);
    }

    #[test]
    fn test_extract_ignores_trailing_slots() {
        let t = CoordinateTriple::extract(&json!([-45.5, 170.25, 12000.5, "id-0042", 7])).unwrap();
        assert_eq!(CoordinateTriple::new(-45.5, 170.25, Some(12000.5)), t);
    }

    #[rstest]
    #[case(json!([null, 5.0, 300]), CandidateError::MissingLatitude)]
    #[case(json!([5.0, null, 300]), CandidateError::MissingLongitude)]
    #[case(json!([5.0]), CandidateError::TooShort(1))]
    #[case(json!([]), CandidateError::TooShort(0))]
    #[case(json!(42), CandidateError::NotPositional(JsonKind::Number))]
    #[case(json!({"lat": 1.0, "lon": 2.0}), CandidateError::NotPositional(JsonKind::Object))]
    #[case(json!(null), CandidateError::NotPositional(JsonKind::Null))]
    #[case(json!(["10.0", 5.0]), CandidateError::NotNumeric { slot: 0, kind: JsonKind::String })]
    #[case(json!([1.0, [2.0]]), CandidateError::NotNumeric { slot: 1, kind: JsonKind::Array })]
    fn test_extract_rejected(#[case] candidate: Value, #[case] want: CandidateError) {
        assert_eq!(Err(want), CoordinateTriple::extract(&candidate));
    }

    #[test]
    fn test_json_kind_display() {
        assert_eq!("object", JsonKind::Object.to_string());
        assert_eq!("null", JsonKind::from(&json!(null)).to_string());
    }
}
