// crates/travellog-core/src/lib.rs

//! # travellog-core
//!
//! Query engine behind a personal travel log: visited countries, completed
//! flights and visited places are filtered and ordered per screen using
//! criteria kept in a preference store, and country borders are expanded
//! into map rings.
//!
//! ```rust
//! use travellog_core::prelude::*;
//!
//! let flights: Vec<CompletedFlight> = serde_json::from_str(r#"[
//!     {"id":"1","flightDate":"01.01.2020","durationHours":"1","durationMinutes":"10"},
//!     {"id":"2","flightDate":"03.01.2020","durationHours":"7","durationMinutes":"0"}
//! ]"#).unwrap();
//!
//! let mut facade = FilterSortFacade::new(MemoryPreferences::default());
//! facade.save_sort::<FlightScreen>(FlightSort::DurationLongestFirst).unwrap();
//!
//! let shown = facade.refresh_flights(&flights);
//! assert_eq!(shown[0].id.as_deref(), Some("2"));
//! ```

pub mod catalog;
pub mod criteria;
pub mod date;
pub mod duration;
pub mod error;
pub mod facade;
pub mod filter;
pub mod geometry;
pub mod loader;
pub mod model;
pub mod prefs;
pub mod session;
pub mod sort;
pub mod text;
// Stored record shapes, used by serde conversions
#[doc(hidden)]
pub mod raw;

pub mod prelude;

// Re-exports
pub use crate::catalog::{CountryCatalog, LazyCatalog};
pub use crate::date::DateKey;
pub use crate::duration::FlightDuration;
pub use crate::error::{Result, TravelError};
pub use crate::facade::{map_overlay, FilterSortFacade, MapOverlay};
pub use crate::geometry::{BorderGeometry, BorderGeometryBuilder, BorderIndex, BorderSource, Ring};
pub use crate::model::{
    Airport, City, CompletedFlight, Continent, Country, LatLng, Place, PlaceKind, PlaceTarget,
    VisitedCountry, VisitedPlace,
};
pub use crate::text::normalize;
