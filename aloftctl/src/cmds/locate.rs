//! This is the module handling the `locate` sub-command.
//!

use eyre::Result;

use aloft_boundaries::Geocoder;

use crate::{Config, LocateOpts};

#[tracing::instrument(skip(cfg))]
pub fn locate_point(cfg: &Config, lopts: &LocateOpts) -> Result<()> {
    let index = cfg.boundaries(&lopts.boundaries)?;
    let region = Geocoder::new(&index).locate(lopts.lat, lopts.lon);
    println!("{}", serde_json::to_string(&region)?);
    Ok(())
}
