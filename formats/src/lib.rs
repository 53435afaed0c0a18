//! Definition of the data formats used by aloft
//!
//! The upstream site does not document its snapshots.  What we know is that a record is an
//! array whose leading slots are latitude, longitude and altitude, and that these records are
//! found either at the top level or in arrays nested under a mapping.
//!
//! - `snapshot` detects the shape of a payload and walks every record candidate,
//! - `triple` does the positional extraction of one candidate,
//! - `record` is the enriched output record,
//! - `output` writes records as JSON or CSV.
//!

pub use output::*;
pub use record::*;
pub use snapshot::*;
pub use triple::*;

mod output;
mod record;
mod snapshot;
mod triple;

/// One hour worth of raw data as sent by the upstream site, no schema.
///
pub type RawSnapshot = serde_json::Value;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
