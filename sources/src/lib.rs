//! Module to deal with the places we fetch hourly snapshots from.
//!
//! A source is anything implementing `Fetchable`: given an hour offset (0 is the latest hour),
//! return the raw JSON snapshot for that hour.  We have two of them:
//!
//! - `HttpSnapshots`, the upstream site, one GET per hour,
//! - `Archive`, a directory of previously saved snapshots.
//!
//! Failures never escape `fetch()`, they are logged and turned into `None`.
//!

use std::fmt::Debug;

use tracing::error;

use aloft_formats::RawSnapshot;

// Re-export these modules for a shorter import path.
//
pub use access::*;
pub use error::*;
pub use site::*;

#[macro_use]
mod macros;

mod access;
mod error;
mod site;

/// This trait enables us to manage different ways of getting snapshots under a single
/// interface.
///
pub trait Fetchable: Debug + Send + Sync {
    /// Return source's name
    fn name(&self) -> String;
    /// Fetch the snapshot for `hour` hours ago, a single attempt
    fn try_fetch(&self, hour: u32) -> Result<RawSnapshot, FetchError>;
    /// Same as `try_fetch()` but any failure is logged and becomes `None`
    fn fetch(&self, hour: u32) -> Option<RawSnapshot> {
        match self.try_fetch(hour) {
            Ok(raw) => Some(raw),
            Err(e) => {
                error!("{}: failed to fetch hour {hour:02}: {e}", self.name());
                None
            }
        }
    }
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
