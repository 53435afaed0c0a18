//! Load a boundary layer from a GeoJSON file.
//!
//! Only `Polygon` & `MultiPolygon` features are kept, and they must carry the name property.
//! Anything else is skipped with a warning, feature order is kept.
//!

use std::fs;
use std::path::Path;

use geo::{Geometry, MultiPolygon};
use geojson::{Feature, GeoJson};
use tracing::{debug, trace, warn};

use crate::{BoundaryError, BoundaryLayer, BoundaryPolygon};

/// Read `path` and build a layer, names are taken from the `key` property.
///
#[tracing::instrument]
pub fn load_layer(path: &Path, key: &str) -> Result<BoundaryLayer, BoundaryError> {
    trace!("loading {path:?}");

    let data = fs::read_to_string(path).map_err(|source| BoundaryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    layer_from_str(&data, key)
}

/// Build a layer from a GeoJSON document.
///
pub fn layer_from_str(data: &str, key: &str) -> Result<BoundaryLayer, BoundaryError> {
    let features = match data.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => return Err(BoundaryError::NoFeatures),
    };

    let total = features.len();
    let polygons: Vec<BoundaryPolygon> = features
        .into_iter()
        .enumerate()
        .filter_map(|(n, f)| to_polygon(n, f, key))
        .collect();

    if polygons.len() != total {
        warn!("{} feature(s) out of {total} skipped", total - polygons.len());
    }
    debug!("{} polygons", polygons.len());
    Ok(BoundaryLayer::new(polygons))
}

fn to_polygon(n: usize, feature: Feature, key: &str) -> Option<BoundaryPolygon> {
    let Some(name) = feature.property(key).and_then(|v| v.as_str()) else {
        warn!("feature #{n} has no {key} property");
        return None;
    };
    let name = name.to_string();

    let Some(geometry) = feature.geometry else {
        warn!("feature #{n} ({name}) has no geometry");
        return None;
    };

    let geometry: MultiPolygon<f64> = match Geometry::<f64>::try_from(geometry) {
        Ok(Geometry::Polygon(p)) => p.into(),
        Ok(Geometry::MultiPolygon(mp)) => mp,
        Ok(_) => {
            warn!("feature #{n} ({name}) is not a polygon");
            return None;
        }
        Err(e) => {
            warn!("feature #{n} ({name}): {e}");
            return None;
        }
    };
    Some(BoundaryPolygon { name, geometry })
}
