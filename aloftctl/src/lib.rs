//! Library part of the `aloftctl` utility.
//!
//! The pipeline itself lives in the other crates of the workspace:
//!
//! - `aloft-sources` fetches hourly snapshots,
//! - `aloft-formats` extracts coordinates from them,
//! - `aloft-boundaries` geocodes them,
//! - `aloft-history` drives all of the above over a window of hours.
//!
//! Here we only have the CLI definition, the configuration file and the sub-commands.
//!

/// Re-export
///
pub use cli::*;
pub use cmds::*;
pub use config::*;

mod cli;
mod cmds;
mod config;
