use serde::{Deserialize, Serialize};

use crate::CoordinateTriple;

/// One enriched position, the output of the whole pipeline.
///
/// `lat` & `lon` are always there, candidates without them never make it this far.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FlightRecord {
    pub lat: f64,
    pub lon: f64,
    pub alt: Option<f64>,
    /// Country containing the position, if any
    pub country: Option<String>,
    /// State or province containing the position, if any
    pub state: Option<String>,
}

impl FlightRecord {
    pub fn new(triple: CoordinateTriple, country: Option<String>, state: Option<String>) -> Self {
        FlightRecord {
            lat: triple.lat,
            lon: triple.lon,
            alt: triple.alt,
            country,
            state,
        }
    }
}
