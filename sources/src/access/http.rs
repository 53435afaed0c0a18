//! Upstream site specific code.
//!
//! There is no authentication and no pagination: one GET per hour offset, the body being a
//! JSON document of undocumented shape.  No retry either, a failure is a failure.
//!

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, trace};

use aloft_formats::RawSnapshot;

use crate::{FetchError, Fetchable, Site};

/// Snapshots are kept for the last 24 hours upstream
const MAX_OFFSET: u32 = 23;

/// This is the HTTP client/source struct.
///
#[derive(Clone, Debug)]
pub struct HttpSnapshots {
    /// Where & how
    pub site: Site,
    /// reqwest blocking client, carries the timeout
    pub client: Client,
}

impl HttpSnapshots {
    #[tracing::instrument]
    pub fn new(site: Site) -> Result<Self, FetchError> {
        trace!("httpsnapshots::new");

        let client = Client::builder()
            .timeout(Duration::from_secs(site.timeout))
            .gzip(true)
            .build()
            .map_err(FetchError::Client)?;
        Ok(HttpSnapshots { site, client })
    }
}

impl Fetchable for HttpSnapshots {
    fn name(&self) -> String {
        self.site.name.clone()
    }

    /// Single call API
    ///
    #[tracing::instrument(skip(self))]
    fn try_fetch(&self, hour: u32) -> Result<RawSnapshot, FetchError> {
        if hour > MAX_OFFSET {
            debug!("hour offset {hour} is beyond what upstream usually keeps");
        }

        let url = self.site.url_for(hour);
        trace!("Fetching data from {}…", url);

        let resp = http_get!(self, url).map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;
        debug!("{} bytes from {}", body.len(), url);

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}
