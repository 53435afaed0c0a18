use std::fmt::{Display, Formatter};

/// Statistics gathered during one run
///
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Wall-clock time in ms
    pub tm: u64,
    /// Offsets requested
    pub hours: u32,
    /// Snapshots successfully fetched
    pub fetched: u32,
    /// Failed fetches
    pub failed: u32,
    /// Offsets not fetched because the run was cancelled
    pub skipped: u32,
    /// Record candidates seen
    pub candidates: usize,
    /// Record candidates rejected
    pub rejected: usize,
    /// Records produced
    pub records: usize,
    /// Records outside every country
    pub no_country: usize,
    /// Records outside every state
    pub no_state: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "time={}ms hours={} fetched={} failed={} skipped={} candidates={} rejected={} records={} no_country={} no_state={}",
            self.tm,
            self.hours,
            self.fetched,
            self.failed,
            self.skipped,
            self.candidates,
            self.rejected,
            self.records,
            self.no_country,
            self.no_state,
        )
    }
}
