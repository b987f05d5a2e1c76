// crates/travellog-core/src/model/record.rs
use super::Country;
use crate::duration::FlightDuration;
use crate::raw::{CompletedFlightRaw, VisitedPlaceRaw};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A country the user has visited. `country_code` is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedCountry {
    pub country_code: String,
    #[serde(default)]
    pub last_visit_date: String,
    #[serde(default)]
    pub visited_places: String,
    /// Catalog entry resolved for display; never persisted.
    #[serde(skip)]
    pub country: Option<Arc<Country>>,
}

impl VisitedCountry {
    pub fn new(
        country_code: impl Into<String>,
        last_visit_date: impl Into<String>,
        visited_places: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            last_visit_date: last_visit_date.into(),
            visited_places: visited_places.into(),
            country: None,
        }
    }

    pub fn with_country(mut self, country: Arc<Country>) -> Self {
        self.country = Some(country);
        self
    }

    pub fn country(&self) -> Option<&Country> {
        self.country.as_deref()
    }

    /// Common name of the resolved country; blank when resolution missed.
    pub fn common_name(&self) -> &str {
        self.country().map(|c| c.common_name()).unwrap_or("")
    }
}

/// An airport as picked by the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
}

/// A flight the user has taken.
///
/// `id` is assigned by the record store; `None` marks a flight that has not
/// been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompletedFlightRaw", into = "CompletedFlightRaw")]
pub struct CompletedFlight {
    pub id: Option<String>,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub flight_date: String,
    pub duration: FlightDuration,
}

impl CompletedFlight {
    pub fn new(
        departure_airport: Airport,
        arrival_airport: Airport,
        flight_date: impl Into<String>,
        duration: FlightDuration,
    ) -> Self {
        Self {
            id: None,
            departure_airport,
            arrival_airport,
            flight_date: flight_date.into(),
            duration,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// A new, unsaved flight in the opposite direction.
    pub fn return_flight(&self, flight_date: impl Into<String>, duration: FlightDuration) -> Self {
        Self {
            id: None,
            departure_airport: self.arrival_airport.clone(),
            arrival_airport: self.departure_airport.clone(),
            flight_date: flight_date.into(),
            duration,
        }
    }
}

/// A city from the city catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub is_capital: bool,
}

/// Any other point of interest (landmark, park, venue).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceKind {
    City,
    Place,
}

/// What a visited place points at: exactly one city or one place.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceTarget {
    City(City),
    Place(Place),
}

impl PlaceTarget {
    pub fn kind(&self) -> PlaceKind {
        match self {
            PlaceTarget::City(_) => PlaceKind::City,
            PlaceTarget::Place(_) => PlaceKind::Place,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlaceTarget::City(c) => &c.name,
            PlaceTarget::Place(p) => &p.name,
        }
    }

    pub fn country_code(&self) -> &str {
        match self {
            PlaceTarget::City(c) => &c.country_code,
            PlaceTarget::Place(p) => &p.country_code,
        }
    }
}

/// A city or place the user has visited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VisitedPlaceRaw", into = "VisitedPlaceRaw")]
pub struct VisitedPlace {
    pub id: Option<String>,
    pub last_visit_date: String,
    pub note: String,
    pub image_url: Option<String>,
    pub target: PlaceTarget,
}

impl VisitedPlace {
    pub fn new(target: PlaceTarget, last_visit_date: impl Into<String>) -> Self {
        Self {
            id: None,
            last_visit_date: last_visit_date.into(),
            note: String::new(),
            image_url: None,
            target,
        }
    }

    pub fn kind(&self) -> PlaceKind {
        self.target.kind()
    }

    /// City name for cities, place name otherwise.
    pub fn name(&self) -> &str {
        self.target.name()
    }
}
