//! Administrative boundaries and point-in-region resolution.
//!
//! A `BoundaryIndex` holds two layers, countries and states/provinces.  It is built once, never
//! modified afterwards and shared by reference with every `Geocoder`, so it can be used from
//! several threads without locking.
//!
//! Layers are usually loaded from GeoJSON (Natural Earth admin-0 & admin-1 exports) but can be
//! built from any list of named polygons.
//!

pub use error::*;
pub use geocoder::*;
pub use index::*;
pub use layer::*;
pub use loader::*;

mod error;
mod geocoder;
mod index;
mod layer;
mod loader;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
