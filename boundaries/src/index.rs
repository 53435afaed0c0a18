use std::path::Path;

use tracing::info;

use crate::{load_layer, BoundaryError, BoundaryLayer};

/// Default name property for Natural Earth admin-0 countries
pub const DEF_COUNTRY_KEY: &str = "NAME";
/// Default name property for Natural Earth admin-1 states & provinces
pub const DEF_STATE_KEY: &str = "name";

/// Both tiers of boundaries, immutable once built.
///
#[derive(Debug, Default)]
pub struct BoundaryIndex {
    countries: BoundaryLayer,
    states: BoundaryLayer,
}

impl BoundaryIndex {
    pub fn new(countries: BoundaryLayer, states: BoundaryLayer) -> Self {
        BoundaryIndex { countries, states }
    }

    /// Load both tiers from GeoJSON files, `None` leaves a tier empty.
    ///
    #[tracing::instrument]
    pub fn load(
        countries: Option<(&Path, &str)>,
        states: Option<(&Path, &str)>,
    ) -> Result<Self, BoundaryError> {
        let countries = match countries {
            Some((path, key)) => load_layer(path, key)?,
            None => BoundaryLayer::default(),
        };
        let states = match states {
            Some((path, key)) => load_layer(path, key)?,
            None => BoundaryLayer::default(),
        };
        info!(
            "Boundaries loaded: {} countries, {} states",
            countries.len(),
            states.len()
        );
        Ok(BoundaryIndex { countries, states })
    }

    pub fn countries(&self) -> &BoundaryLayer {
        &self.countries
    }

    pub fn states(&self) -> &BoundaryLayer {
        &self.states
    }
}
