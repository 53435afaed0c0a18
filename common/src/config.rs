//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for the configuration file.  This is a
//! configuration struct neutral loading engine, storing only the base directory and with `load()`
//! reading the given file or the default one.
//!
//! This encapsulates the configuration, available with `.into_inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::makepath;

/// Config filename
const CONFIG: &str = "config.hcl";

/// Every configuration file carries its own version number.
///
pub trait Versioned {
    fn version(&self) -> usize;
}

/// Configuration engine for a given project tag, the actual data is of type `T`.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + Default + DeserializeOwned + Versioned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: T,
}

impl<T> ConfigFile<T>
where
    T: Debug + Default + DeserializeOwned + Versioned,
{
    #[tracing::instrument]
    fn new(tag: &str) -> Self {
        let basedir = match BaseDirs::new() {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config");

                #[cfg(windows)]
                let base = base.data_local_dir().to_path_buf();

                debug!("base = {base:?}");
                makepath!(base, tag)
            }
            None => {
                warn!("No home directory, using current one");
                makepath!(".", tag)
            }
        };
        ConfigFile {
            tag: String::from(tag),
            basedir,
            inner: T::default(),
        }
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        let cfg = self.config_path().join(CONFIG);
        debug!("default = {cfg:?}");
        cfg
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI, which must exist
    /// - default file in basedir (based on $HOME or $LOCALAPPDATA), `T::default()` if absent
    ///
    /// The file `version` must be `want`.
    ///
    #[tracing::instrument]
    pub fn load(tag: &str, fname: Option<&Path>, want: usize) -> Result<ConfigFile<T>> {
        let mut cfg = ConfigFile::<T>::new(tag);

        let fname = match fname {
            Some(fname) => {
                if !fname.exists() {
                    return Err(eyre!("Unknown config file {:?}", fname));
                }
                fname.to_path_buf()
            }
            None => {
                let def = cfg.default_file();
                if !def.exists() {
                    debug!("No default config in {def:?}, using defaults");
                    return Ok(cfg);
                }
                def
            }
        };

        trace!("Loading {} config file {fname:?}", cfg.tag);

        let data = fs::read_to_string(&fname)?;
        let data: T = hcl::from_str(&data)?;
        debug!("struct data = {data:?}");

        if data.version() != want {
            return Err(eyre!(
                "Bad config file version {} in {:?}, want {}",
                data.version(),
                fname,
                want
            ));
        }
        cfg.inner = data;
        Ok(cfg)
    }

    /// Consume the engine and keep only the configuration
    ///
    pub fn into_inner(self) -> T {
        self.inner
    }
}
