//! Count of records per country, as a table.
//!

use std::collections::BTreeMap;

use tabled::builder::Builder;
use tabled::settings::Style;

use aloft_formats::FlightRecord;

/// Label for records outside every country
const UNKNOWN: &str = "(none)";

/// Count records per country, biggest first then by name.
///
pub fn count_by_country(records: &[FlightRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in records {
        let name = rec.country.as_deref().unwrap_or(UNKNOWN);
        *counts.entry(name).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, n)| (name.to_string(), n))
        .collect();
    // BTreeMap already sorted by name and sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn summary_table(counts: &[(String, usize)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Country", "Balloons"]);
    counts.iter().for_each(|(name, n)| {
        builder.push_record([name.clone(), n.to_string()]);
    });

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let table = builder.build().with(Style::modern()).to_string();
    format!("{} records in {} countries:\n{table}", total, counts.len())
}
