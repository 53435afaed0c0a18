//! This is the module handling the `history` sub-command.
//!
//! The run can be interrupted with ^C, what has been collected so far is still written out.
//!

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use eyre::Result;
use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;
use tracing::{info, trace};

use aloft_formats::write_records;
use aloft_history::History;
use aloft_sources::{Archive, Fetchable, HttpSnapshots};

use crate::{count_by_country, summary_table, Config, HistoryOpts};

#[tracing::instrument(skip(cfg))]
pub fn run_history(cfg: &Config, hopts: &HistoryOpts) -> Result<()> {
    let hours = hopts.hours.unwrap_or(cfg.hours);
    let jobs = hopts.jobs.unwrap_or(cfg.jobs);
    trace!("run_history(hours={hours}, jobs={jobs})");

    let index = cfg.boundaries(&hopts.boundaries)?;

    let src: Box<dyn Fetchable> = match &hopts.from_dir {
        Some(dir) => Box::new(Archive::new(dir)),
        None => Box::new(HttpSnapshots::new(cfg.site()?)?),
    };

    // Stop fetching on ^C, keep what we have
    //
    let stop = Arc::new(AtomicBool::new(false));
    for sig in TERM_SIGNALS {
        flag::register(*sig, Arc::clone(&stop))?;
    }

    info!("Collecting {hours} hours from {}", src.name());
    let (records, stats) = History::new(src.as_ref(), &index)
        .jobs(jobs)
        .stop_on(stop)
        .collect_with_stats(hours);
    info!("{} records", stats.records);

    if hopts.summary {
        if let Some(fname) = &hopts.output {
            write_records(BufWriter::new(File::create(fname)?), &records, hopts.format)?;
        }
        println!("{}", summary_table(&count_by_country(&records)));
        return Ok(());
    }

    let out: Box<dyn Write> = match &hopts.output {
        Some(fname) => Box::new(File::create(fname)?),
        None => Box::new(io::stdout()),
    };
    let mut out = BufWriter::new(out);
    write_records(&mut out, &records, hopts.format)?;
    out.flush()?;
    Ok(())
}
