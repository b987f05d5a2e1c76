// crates/travellog-core/src/model/convert.rs
use crate::duration::FlightDuration;
use crate::error::TravelError;
use crate::model::record::{CompletedFlight, PlaceTarget, VisitedPlace};
use crate::raw::{CompletedFlightRaw, VisitedPlaceRaw};

/// **Stored -> Domain:** duration text is parsed once, here.
impl From<CompletedFlightRaw> for CompletedFlight {
    fn from(raw: CompletedFlightRaw) -> Self {
        let duration = FlightDuration::parse(&raw.duration_hours, &raw.duration_minutes)
            .unwrap_or_else(|_| {
                tracing::debug!(
                    hours = %raw.duration_hours,
                    minutes = %raw.duration_minutes,
                    "lenient duration parse for stored flight"
                );
                FlightDuration::from_text(&raw.duration_hours, &raw.duration_minutes)
            });
        CompletedFlight {
            id: raw.id,
            departure_airport: raw.departure_airport,
            arrival_airport: raw.arrival_airport,
            flight_date: raw.flight_date,
            duration,
        }
    }
}

impl From<CompletedFlight> for CompletedFlightRaw {
    fn from(f: CompletedFlight) -> Self {
        CompletedFlightRaw {
            id: f.id,
            departure_airport: f.departure_airport,
            arrival_airport: f.arrival_airport,
            flight_date: f.flight_date,
            duration_hours: f.duration.hours().to_string(),
            duration_minutes: f.duration.minutes().to_string(),
        }
    }
}

/// **Stored -> Domain:** exactly one of city/place must be set.
impl TryFrom<VisitedPlaceRaw> for VisitedPlace {
    type Error = TravelError;

    fn try_from(raw: VisitedPlaceRaw) -> Result<Self, Self::Error> {
        let target = match (raw.visited_city, raw.visited_place) {
            (Some(city), None) => PlaceTarget::City(city),
            (None, Some(place)) => PlaceTarget::Place(place),
            (Some(_), Some(_)) => {
                return Err(TravelError::InvalidPlace(
                    "both visitedCity and visitedPlace are set".into(),
                ))
            }
            (None, None) => {
                return Err(TravelError::InvalidPlace(
                    "neither visitedCity nor visitedPlace is set".into(),
                ))
            }
        };
        Ok(VisitedPlace {
            id: raw.id,
            last_visit_date: raw.last_visit_date,
            note: raw.note,
            image_url: raw.image_url,
            target,
        })
    }
}

impl From<VisitedPlace> for VisitedPlaceRaw {
    fn from(p: VisitedPlace) -> Self {
        let (visited_city, visited_place) = match p.target {
            PlaceTarget::City(c) => (Some(c), None),
            PlaceTarget::Place(pl) => (None, Some(pl)),
        };
        VisitedPlaceRaw {
            id: p.id,
            last_visit_date: p.last_visit_date,
            note: p.note,
            image_url: p.image_url,
            visited_city,
            visited_place,
        }
    }
}
