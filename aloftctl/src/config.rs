//! Configuration file for `aloftctl`.
//!
//! Everything has a default so the file is optional, CLI flags override it.
//!

use std::path::{Path, PathBuf};

use eyre::Result;
use serde::Deserialize;
use tracing::{trace, warn};

use aloft_boundaries::{BoundaryIndex, DEF_COUNTRY_KEY, DEF_STATE_KEY};
use aloft_common::{ConfigFile, Versioned};
use aloft_sources::{Site, DEF_TIMEOUT, DEF_URL};

use crate::BoundaryOpts;

/// Project tag, config lives in `~/.config/aloft`
pub const TAG: &str = "aloft";
/// Current version
pub const CVERSION: usize = 1;

/// Default window
const DEF_HOURS: u32 = 24;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version for safety
    pub version: usize,
    /// Site name, only used in traces
    pub name: String,
    /// URL template with a `{hour}` placeholder
    pub url: String,
    /// Per-request timeout in seconds
    pub timeout: u64,
    /// Default window for `history`
    pub hours: u32,
    /// Default number of concurrent fetches
    pub jobs: usize,
    /// Countries GeoJSON
    pub countries: Option<PathBuf>,
    /// Property holding the country name
    pub country_key: String,
    /// States & provinces GeoJSON
    pub states: Option<PathBuf>,
    /// Property holding the state name
    pub state_key: String,
}

impl Default for Config {
    fn default() -> Self {
        let site = Site::default();
        Config {
            version: CVERSION,
            name: site.name,
            url: DEF_URL.to_string(),
            timeout: DEF_TIMEOUT,
            hours: DEF_HOURS,
            jobs: 1,
            countries: None,
            country_key: DEF_COUNTRY_KEY.to_string(),
            states: None,
            state_key: DEF_STATE_KEY.to_string(),
        }
    }
}

impl Versioned for Config {
    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    /// Load the given file, or the default one if there is one.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Self> {
        let cfg = ConfigFile::<Config>::load(TAG, fname, CVERSION)?;
        Ok(cfg.into_inner())
    }

    /// Site to fetch from
    ///
    pub fn site(&self) -> Result<Site> {
        Ok(Site::new(&self.name, &self.url, self.timeout)?)
    }

    /// Load boundaries, CLI options first then configuration.
    ///
    #[tracing::instrument(skip(self))]
    pub fn boundaries(&self, opts: &BoundaryOpts) -> Result<BoundaryIndex> {
        let countries = opts.countries.as_ref().or(self.countries.as_ref());
        let states = opts.states.as_ref().or(self.states.as_ref());
        trace!("countries={countries:?} states={states:?}");

        if countries.is_none() && states.is_none() {
            warn!("No boundaries configured, regions will be empty");
        }

        let index = BoundaryIndex::load(
            countries.map(|p| (p.as_path(), self.country_key.as_str())),
            states.map(|p| (p.as_path(), self.state_key.as_str())),
        )?;
        Ok(index)
    }
}
