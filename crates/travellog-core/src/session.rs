// crates/travellog-core/src/session.rs
//! Explicit per-user context and edit flows.
//!
//! Screens that need "the current user", "the homeland" or "the record being
//! edited" get them from these values, passed in by the caller. Nothing here
//! is global.
use crate::error::{Result, TravelError};
use crate::model::{CompletedFlight, VisitedCountry};

/// Who is looking at the data. Created after sign-in, dropped on sign-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    user_id: String,
    homeland: Option<String>,
}

impl UserSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            homeland: None,
        }
    }

    pub fn with_homeland(mut self, iso2: impl Into<String>) -> Self {
        self.homeland = Some(iso2.into());
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn homeland(&self) -> Option<&str> {
        self.homeland.as_deref()
    }
}

/// A record being created or edited.
///
/// Begun when the user enters an edit flow and consumed by either
/// [`EditSession::finish`] or [`EditSession::abandon`] when they leave it.
#[derive(Debug)]
pub struct EditSession<T> {
    user_id: String,
    draft: T,
}

impl<T> EditSession<T> {
    pub fn begin(session: &UserSession, draft: T) -> Self {
        tracing::trace!(user = session.user_id(), "edit flow started");
        Self {
            user_id: session.user_id.clone(),
            draft,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Leaves the flow, handing back the finished record.
    pub fn finish(self) -> T {
        self.draft
    }

    /// Leaves the flow, discarding the draft.
    pub fn abandon(self) {
        tracing::trace!(user = %self.user_id, "edit flow abandoned");
    }
}

/// Inserts or overwrites by country code. Returns `true` when an existing
/// visit was replaced.
pub fn upsert_visited_country(visits: &mut Vec<VisitedCountry>, visit: VisitedCountry) -> bool {
    match visits
        .iter_mut()
        .find(|v| v.country_code.eq_ignore_ascii_case(&visit.country_code))
    {
        Some(existing) => {
            *existing = visit;
            true
        }
        None => {
            visits.push(visit);
            false
        }
    }
}

/// Saves a flight: a new flight (no id) gets `next_id()` and is appended,
/// a known id replaces the stored flight. Returns the flight's id.
pub fn upsert_flight(
    flights: &mut Vec<CompletedFlight>,
    mut flight: CompletedFlight,
    next_id: impl FnOnce() -> String,
) -> Result<String> {
    match flight.id.clone() {
        None => {
            let id = next_id();
            flight.id = Some(id.clone());
            flights.push(flight);
            Ok(id)
        }
        Some(id) => {
            let slot = flights
                .iter_mut()
                .find(|f| f.id.as_deref() == Some(id.as_str()))
                .ok_or_else(|| TravelError::NotFound(format!("flight {id}")))?;
            *slot = flight;
            Ok(id)
        }
    }
}

/// Removes a flight by id; returns the removed flight.
pub fn remove_flight(flights: &mut Vec<CompletedFlight>, id: &str) -> Option<CompletedFlight> {
    let pos = flights.iter().position(|f| f.id.as_deref() == Some(id))?;
    Some(flights.remove(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::FlightDuration;
    use crate::model::Airport;

    fn airport(name: &str) -> Airport {
        Airport {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn re_adding_a_country_overwrites() {
        let mut visits = vec![VisitedCountry::new("SK", "01.01.2019", "Nitra")];
        let replaced = upsert_visited_country(
            &mut visits,
            VisitedCountry::new("sk", "02.02.2022", "Košice"),
        );
        assert!(replaced);
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].visited_places, "Košice");
        assert!(!upsert_visited_country(&mut visits, VisitedCountry::new("CZ", "", "")));
        assert_eq!(visits.len(), 2);
    }

    #[test]
    fn edit_flow_returns_draft() {
        let user = UserSession::new("u1").with_homeland("SK");
        let outbound = CompletedFlight::new(
            airport("BTS"),
            airport("LHR"),
            "01.05.2023",
            FlightDuration::new(2, 30).unwrap(),
        );
        let mut edit = EditSession::begin(&user, outbound.return_flight("08.05.2023", FlightDuration::new(2, 40).unwrap()));
        edit.draft_mut().flight_date = "09.05.2023".into();
        let ret = edit.finish();
        assert!(ret.is_new());
        assert_eq!(ret.departure_airport.name, "LHR");
        assert_eq!(ret.arrival_airport.name, "BTS");
        assert_eq!(ret.flight_date, "09.05.2023");
    }

    #[test]
    fn new_flights_get_ids_and_known_ids_replace() {
        let mut flights = Vec::new();
        let f = CompletedFlight::new(airport("A"), airport("B"), "01.01.2020", FlightDuration::default());
        let id = upsert_flight(&mut flights, f.clone(), || "f-1".into()).unwrap();
        assert_eq!(id, "f-1");

        let mut edited = flights[0].clone();
        edited.flight_date = "02.01.2020".into();
        upsert_flight(&mut flights, edited, || unreachable!()).unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_date, "02.01.2020");

        let mut ghost = f;
        ghost.id = Some("nope".into());
        assert!(upsert_flight(&mut flights, ghost, || unreachable!()).is_err());

        assert!(remove_flight(&mut flights, "f-1").is_some());
        assert!(flights.is_empty());
    }
}
