//! travellog prelude: bring common types and traits into scope.

pub use crate::catalog::{CountryCatalog, LazyCatalog};
pub use crate::criteria::{
    ContinentFilter, CountryCriteria, CountrySort, FlightCriteria, FlightSort, PlaceCriteria,
    PlaceSort, SortMode,
};
pub use crate::error::{Result, TravelError};
pub use crate::facade::{
    map_overlay, CountryScreen, FilterSortFacade, FlightScreen, MapOverlay, PlaceScreen, Screen,
};
pub use crate::filter::{filter_catalog, filter_countries, filter_flights, filter_places};
pub use crate::geometry::{BorderGeometry, BorderGeometryBuilder, BorderIndex, BorderSource, Ring};
pub use crate::model::{
    Airport, City, CompletedFlight, Continent, Country, LatLng, Place, PlaceKind, PlaceTarget,
    VisitedCountry, VisitedPlace,
};
pub use crate::prefs::{
    EntityKind, JsonFilePreferences, MemoryPreferences, PrefField, PreferenceStore,
    PreferenceStoreExt, StoredCriteria,
};
pub use crate::session::{EditSession, UserSession};
pub use crate::sort::{sort_countries, sort_flights, sort_places};
pub use crate::text::normalize;
pub use crate::{DateKey, FlightDuration};
