//! Previously saved snapshots, one `HH.json` file per hour offset in a directory.
//!
//! Handy to replay a window offline.
//!

use std::fs;
use std::path::PathBuf;

use tracing::trace;

use aloft_formats::RawSnapshot;

use crate::{FetchError, Fetchable};

#[derive(Clone, Debug)]
pub struct Archive {
    /// Directory holding `00.json`, `01.json`, etc.
    pub dir: PathBuf,
}

impl Archive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Archive { dir: dir.into() }
    }

    /// Filename used for a given offset
    ///
    pub fn path_for(&self, hour: u32) -> PathBuf {
        self.dir.join(format!("{hour:02}.json"))
    }
}

impl Fetchable for Archive {
    fn name(&self) -> String {
        format!("archive:{}", self.dir.display())
    }

    #[tracing::instrument(skip(self))]
    fn try_fetch(&self, hour: u32) -> Result<RawSnapshot, FetchError> {
        let path = self.path_for(hour);
        trace!("Reading {path:?}");

        let data = fs::read_to_string(&path).map_err(|source| FetchError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| FetchError::Decode {
            url: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_archive_fetch() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("04.json"), r#"{"a": [[1.0, 2.0, 3.0]]}"#).unwrap();
        fs::write(dir.path().join("05.json"), "not json").unwrap();

        let src = Archive::new(dir.path());
        assert_eq!(Some(json!({"a": [[1.0, 2.0, 3.0]]})), src.fetch(4));
        assert!(matches!(src.try_fetch(5), Err(FetchError::Decode { .. })));
        assert!(matches!(src.try_fetch(6), Err(FetchError::Io { .. })));
        assert!(src.fetch(6).is_none());
    }

    #[test]
    fn test_archive_path() {
        let src = Archive::new("/tmp/snaps");
        assert_eq!(PathBuf::from("/tmp/snaps/09.json"), src.path_for(9));
    }
}
