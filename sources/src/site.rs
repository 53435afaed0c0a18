//! Module that defines what is a site, i.e. the templated endpoint serving one JSON snapshot
//! per hour.
//!

use serde::{Deserialize, Serialize};

use crate::FetchError;

/// Placeholder for the hour offset in URL templates
pub const HOUR_TAG: &str = "{hour}";
/// Upstream site
pub const DEF_URL: &str = "https://a.windbornesystems.com/treasure/{hour}.json";
/// Default per-request timeout in seconds
pub const DEF_TIMEOUT: u64 = 10;

/// Describe what a site is.
///
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Site {
    /// Name of the site
    pub name: String,
    /// URL template, `{hour}` is replaced by the zero-padded offset
    pub url: String,
    /// Per-request timeout in seconds
    pub timeout: u64,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            name: "windborne".to_string(),
            url: DEF_URL.to_string(),
            timeout: DEF_TIMEOUT,
        }
    }
}

impl Site {
    /// Create a site, the template must have a `{hour}` placeholder.
    ///
    pub fn new(name: &str, url: &str, timeout: u64) -> Result<Self, FetchError> {
        if !url.contains(HOUR_TAG) {
            return Err(FetchError::BadTemplate(url.to_string()));
        }
        Ok(Site {
            name: name.to_string(),
            url: url.to_string(),
            timeout,
        })
    }

    /// Expand the template for the given hour offset, always at least two digits.
    ///
    pub fn url_for(&self, hour: u32) -> String {
        self.url.replace(HOUR_TAG, &format!("{hour:02}"))
    }
}
