//! Drive the whole pipeline over a window of hourly snapshots.
//!
//! For every hour offset in `[0, hours)`: fetch the snapshot, extract the coordinate triples,
//! geocode each of them and append the resulting records.  Failures stay local to their hour,
//! the run always goes to the end (unless cancelled).
//!
//! Fetches are done one after the other by default.  With `jobs(n)` they are spread over a
//! pool of `n` threads, parsing & geocoding still happen on the calling thread in hour order so
//! the output is the same either way.
//!

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{info, trace, warn};

use aloft_boundaries::{BoundaryIndex, Geocoder};
use aloft_formats::{parse_with_report, FlightRecord, RawSnapshot};
use aloft_sources::Fetchable;

pub use stats::*;

mod stats;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Outcome of fetching one offset
///
#[derive(Debug)]
enum Fetched {
    Snapshot(RawSnapshot),
    Failed,
    Skipped,
}

/// The history aggregator, borrowing a source and the boundaries for the duration of runs.
///
#[derive(Debug)]
pub struct History<'a> {
    source: &'a dyn Fetchable,
    geocoder: Geocoder<'a>,
    /// Max. number of concurrent fetches
    jobs: usize,
    /// Cancellation flag
    stop: Option<Arc<AtomicBool>>,
}

impl<'a> History<'a> {
    pub fn new(source: &'a dyn Fetchable, index: &'a BoundaryIndex) -> Self {
        History {
            source,
            geocoder: Geocoder::new(index),
            jobs: 1,
            stop: None,
        }
    }

    /// Number of concurrent fetches, 0 is treated as 1.
    ///
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Once `flag` is set, remaining offsets are not fetched anymore.
    ///
    pub fn stop_on(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    /// Collect all records for the last `hours` hours.
    ///
    pub fn collect(&self, hours: u32) -> Vec<FlightRecord> {
        self.collect_with_stats(hours).0
    }

    /// Same as `collect()` with run statistics.
    ///
    #[tracing::instrument(skip(self))]
    pub fn collect_with_stats(&self, hours: u32) -> (Vec<FlightRecord>, Stats) {
        let start = Instant::now();
        let mut stats = Stats {
            hours,
            ..Default::default()
        };
        let mut records = vec![];

        if self.jobs > 1 && hours > 1 {
            for (hour, fetched) in (0..hours).zip(self.fetch_parallel(hours)) {
                self.process(hour, fetched, &mut records, &mut stats);
            }
        } else {
            for hour in 0..hours {
                let fetched = self.fetch_one(hour);
                self.process(hour, fetched, &mut records, &mut stats);
            }
        }

        if stats.skipped > 0 {
            warn!("Run cancelled, {} hour(s) not fetched", stats.skipped);
        }
        stats.records = records.len();
        stats.tm = start.elapsed().as_millis() as u64;
        info!("{}: {stats}", self.source.name());
        (records, stats)
    }

    fn cancelled(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn fetch_one(&self, hour: u32) -> Fetched {
        if self.cancelled() {
            return Fetched::Skipped;
        }
        match self.source.fetch(hour) {
            Some(raw) => Fetched::Snapshot(raw),
            None => Fetched::Failed,
        }
    }

    /// Fetch every offset on a pool of `jobs` threads, results are in offset order.
    ///
    fn fetch_parallel(&self, hours: u32) -> Vec<Fetched> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|n| format!("fetch-{n}"))
            .build();

        match pool {
            Ok(pool) => {
                trace!("fetching {hours} hours with {} threads", self.jobs);
                pool.install(|| {
                    (0..hours)
                        .into_par_iter()
                        .map(|hour| self.fetch_one(hour))
                        .collect()
                })
            }
            Err(e) => {
                warn!("Can not create fetch pool ({e}), fetching sequentially");
                (0..hours).map(|hour| self.fetch_one(hour)).collect()
            }
        }
    }

    /// Parse & geocode one snapshot, then append its records.
    ///
    fn process(
        &self,
        hour: u32,
        fetched: Fetched,
        records: &mut Vec<FlightRecord>,
        stats: &mut Stats,
    ) {
        let raw = match fetched {
            Fetched::Snapshot(raw) => raw,
            Fetched::Failed => {
                stats.failed += 1;
                info!("Hour {hour}: extracted 0 entries (fetch failed)");
                return;
            }
            Fetched::Skipped => {
                stats.skipped += 1;
                trace!("Hour {hour}: skipped");
                return;
            }
        };
        stats.fetched += 1;

        let report = parse_with_report(Some(&raw));
        stats.candidates += report.candidates;
        stats.rejected += report.rejected;

        // Count is taken after geocoding, which never drops a triple
        let before = records.len();
        for triple in report.triples {
            let region = self.geocoder.locate(triple.lat, triple.lon);
            if region.country.is_none() {
                stats.no_country += 1;
            }
            if region.state.is_none() {
                stats.no_state += 1;
            }
            records.push(FlightRecord::new(triple, region.country, region.state));
        }
        info!("Hour {hour}: extracted {} entries", records.len() - before);
    }
}
