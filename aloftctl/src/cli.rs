//! Module describing all possible commands and sub-commands to the `aloftctl` main driver
//!
//! - `fetch` retrieves one raw snapshot and dumps it into a file or `stdout`,
//! - `parse` extracts coordinates from a saved snapshot,
//! - `history` runs the whole pipeline over the last N hours,
//! - `locate` geocodes a single point,
//! - `completion` is here just to configure the various shells completion system.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Args, Parser};
use clap_complete::shells::Shell;

use aloft_formats::OutputFormat;

/// CLI options
#[derive(Debug, Parser)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Also write traces into hourly files in this directory.
    #[clap(short = 'L', long)]
    pub log_dir: Option<PathBuf>,
    /// Display traces as a tree of spans.
    #[clap(short = 'T', long)]
    pub tree: bool,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `fetch [-o FILE] HOUR`
/// `parse FILE`
/// `history [-H hours] [-j jobs] [--countries F] [--states F] [--from-dir D] [-f FMT] [-o FILE] [-s]`
/// `locate [--countries F] [--states F] LAT LON`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Fetch one raw snapshot
    Fetch(FetchOpts),
    /// Extract coordinates from a saved snapshot
    Parse(ParseOpts),
    /// Fetch, parse & geocode the last hours
    History(HistoryOpts),
    /// Find the country & state of a point
    Locate(LocateOpts),
}

// ------

/// Options for fetching a single snapshot.
///
#[derive(Debug, Parser)]
pub struct FetchOpts {
    /// Output file.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Hour offset, 0 is the latest.
    pub hour: u32,
}

// ------

#[derive(Debug, Parser)]
pub struct ParseOpts {
    /// Saved snapshot (JSON).
    pub file: PathBuf,
}

// ------

/// Boundary datasets, override the configuration file.
///
#[derive(Args, Debug, Default)]
pub struct BoundaryOpts {
    /// Countries GeoJSON file.
    #[clap(long)]
    pub countries: Option<PathBuf>,
    /// States & provinces GeoJSON file.
    #[clap(long)]
    pub states: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct HistoryOpts {
    /// Number of hours to go back.
    #[clap(short = 'H', long)]
    pub hours: Option<u32>,
    /// Number of concurrent fetches.
    #[clap(short = 'j', long)]
    pub jobs: Option<usize>,
    #[clap(flatten)]
    pub boundaries: BoundaryOpts,
    /// Read snapshots from this directory (`00.json`, `01.json`, …) instead of the site.
    #[clap(long)]
    pub from_dir: Option<PathBuf>,
    /// Output format (json, csv).
    #[clap(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,
    /// Output file.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Print a count per country instead of the records (they still go to -o if given).
    #[clap(short = 's', long)]
    pub summary: bool,
}

// ------

#[derive(Debug, Parser)]
#[command(allow_negative_numbers = true)]
pub struct LocateOpts {
    #[clap(flatten)]
    pub boundaries: BoundaryOpts,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}
