// crates/travellog-core/src/model/mod.rs
pub mod convert;
pub mod country;
pub mod record;

pub use country::{Continent, Country, CountryName, NameVariant};
pub use record::{
    Airport, City, CompletedFlight, Place, PlaceKind, PlaceTarget, VisitedCountry, VisitedPlace,
};

use serde::{Deserialize, Serialize};

/// A point in map order: latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}
