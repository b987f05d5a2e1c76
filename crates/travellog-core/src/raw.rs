// crates/travellog-core/src/raw.rs
//! Stored record shapes.
//!
//! These mirror what the record store holds: durations as text and the
//! visited place as two nullable fields. Domain types convert through them
//! on (de)serialization, see `model::convert`.
use crate::model::{Airport, City, Place};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedFlightRaw {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub departure_airport: Airport,
    #[serde(default)]
    pub arrival_airport: Airport,
    #[serde(default)]
    pub flight_date: String,
    #[serde(default)]
    pub duration_hours: String,
    #[serde(default)]
    pub duration_minutes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedPlaceRaw {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub last_visit_date: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub visited_city: Option<City>,
    #[serde(default)]
    pub visited_place: Option<Place>,
}
