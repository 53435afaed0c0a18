//! Write a set of records as JSON or CSV.
//!

use std::io::Write;

use eyre::Result;
use strum::{Display, EnumString, VariantNames};
use tracing::trace;

use crate::FlightRecord;

/// Supported output formats
///
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// CSV with a header line, empty cells for missing values
    Csv,
}

/// Write all records into `out` using the given format.
///
#[tracing::instrument(skip(out, records))]
pub fn write_records<W: Write>(out: W, records: &[FlightRecord], fmt: OutputFormat) -> Result<()> {
    trace!("writing {} records", records.len());
    match fmt {
        OutputFormat::Json => {
            let mut out = out;
            serde_json::to_writer_pretty(&mut out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for rec in records {
                wtr.serialize(rec)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
