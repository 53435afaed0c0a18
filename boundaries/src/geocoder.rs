//! Resolve a coordinate into the country & state containing it.
//!

use geo::Point;
use serde::Serialize;

use crate::BoundaryIndex;

/// Names of the regions containing a point, `None` when no polygon of the tier matches.
///
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Region {
    pub country: Option<String>,
    pub state: Option<String>,
}

/// Point-in-region lookups against a shared, read-only `BoundaryIndex`.
///
#[derive(Clone, Copy, Debug)]
pub struct Geocoder<'a> {
    index: &'a BoundaryIndex,
}

impl<'a> Geocoder<'a> {
    pub fn new(index: &'a BoundaryIndex) -> Self {
        Geocoder { index }
    }

    /// Each tier is resolved independently, first match in dataset order wins.  There is no
    /// nearest-region fallback.
    ///
    pub fn locate(&self, lat: f64, lon: f64) -> Region {
        // x is longitude
        let point = Point::new(lon, lat);

        Region {
            country: self.index.countries().find(&point).map(|p| p.name.clone()),
            state: self.index.states().find(&point).map(|p| p.name.clone()),
        }
    }
}
