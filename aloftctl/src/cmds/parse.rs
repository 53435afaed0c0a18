//! This is the module handling the `parse` sub-command.
//!

use std::fs;

use eyre::Result;
use tracing::trace;

use aloft_formats::{parse_with_report, RawSnapshot};

use crate::ParseOpts;

/// Run the extraction on a saved snapshot and print the triples.
///
#[tracing::instrument]
pub fn parse_file(popts: &ParseOpts) -> Result<()> {
    trace!("parse_file({:?})", popts.file);

    let data = fs::read_to_string(&popts.file)?;
    let raw: RawSnapshot = serde_json::from_str(&data)?;

    let report = parse_with_report(Some(&raw));
    println!(
        "{} triples ({} candidates, {} rejected)",
        report.triples.len(),
        report.candidates,
        report.rejected
    );
    println!("{}", serde_json::to_string_pretty(&report.triples)?);
    Ok(())
}
