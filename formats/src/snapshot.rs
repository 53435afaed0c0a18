//! Shape detection & normalisation of one raw snapshot.
//!
//! Known shapes are:
//!
//! - an array of records,
//! - a mapping where some values are arrays of records (other values are ignored).
//!
//! Everything else is logged and yields nothing.
//!

use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::{CoordinateTriple, JsonKind, RawSnapshot};

/// Shapes of snapshot we know how to walk.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapshotShape<'a> {
    /// Top-level array, every element is a candidate
    Sequence(&'a [Value]),
    /// Top-level object, elements of every array value are candidates
    Mapping(&'a Map<String, Value>),
    /// Anything else
    Unknown(JsonKind),
}

impl<'a> From<&'a Value> for SnapshotShape<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Array(list) => SnapshotShape::Sequence(list),
            Value::Object(map) => SnapshotShape::Mapping(map),
            other => SnapshotShape::Unknown(other.into()),
        }
    }
}

impl<'a> SnapshotShape<'a> {
    /// Iterate over every record candidate, in payload order.
    ///
    pub fn candidates(&self) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
        match *self {
            SnapshotShape::Sequence(list) => Box::new(list.iter()),
            SnapshotShape::Mapping(map) => {
                Box::new(map.values().filter_map(Value::as_array).flatten())
            }
            SnapshotShape::Unknown(_) => Box::new(std::iter::empty()),
        }
    }
}

/// Result of parsing one snapshot, with some counters.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseReport {
    /// Extracted triples, in payload order
    pub triples: Vec<CoordinateTriple>,
    /// Number of candidates examined
    pub candidates: usize,
    /// Number of candidates rejected
    pub rejected: usize,
}

/// Parse a snapshot into coordinate triples.  `None` means the fetch failed.
///
pub fn parse(raw: Option<&RawSnapshot>) -> Vec<CoordinateTriple> {
    parse_with_report(raw).triples
}

/// Same as `parse()` but keep the counters.
///
#[tracing::instrument(skip(raw))]
pub fn parse_with_report(raw: Option<&RawSnapshot>) -> ParseReport {
    let Some(raw) = raw else {
        return ParseReport::default();
    };

    let shape = SnapshotShape::from(raw);
    if let SnapshotShape::Unknown(kind) = shape {
        warn!("Unknown JSON structure: {kind}");
        return ParseReport::default();
    }

    let mut report = ParseReport::default();
    for candidate in shape.candidates() {
        report.candidates += 1;
        match CoordinateTriple::extract(candidate) {
            Ok(triple) => report.triples.push(triple),
            Err(e) => {
                trace!("candidate #{} skipped: {e}", report.candidates - 1);
                report.rejected += 1;
            }
        }
    }
    report
}
