use thiserror::Error;

/// Errors when loading boundary datasets.
///
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Can not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("GeoJSON document is a bare geometry, no feature to name")]
    NoFeatures,
}
