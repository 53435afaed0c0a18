//! This is the module handling the `fetch` sub-command.
//!
//! Saving with `-o DIR/HH.json` makes a directory usable by `history --from-dir`.
//!

use std::fs::File;
use std::io::{self, BufWriter, Write};

use eyre::Result;
use tracing::{info, trace};

use aloft_sources::{Fetchable, HttpSnapshots};

use crate::{Config, FetchOpts};

/// Fetch one snapshot and dump it as pretty JSON.  Here a failure is an error.
///
#[tracing::instrument(skip(cfg))]
pub fn fetch_snapshot(cfg: &Config, fopts: &FetchOpts) -> Result<()> {
    trace!("fetch_snapshot({})", fopts.hour);

    let src = HttpSnapshots::new(cfg.site()?)?;
    info!("Fetching hour {:02} from {}", fopts.hour, src.name());

    let raw = src.try_fetch(fopts.hour)?;

    let out: Box<dyn Write> = match &fopts.output {
        Some(fname) => Box::new(File::create(fname)?),
        None => Box::new(io::stdout()),
    };
    let mut out = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut out, &raw)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
