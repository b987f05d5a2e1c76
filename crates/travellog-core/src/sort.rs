// crates/travellog-core/src/sort.rs
//! Record sorters, one per screen.
//!
//! Each sorter returns a reordered copy. Every mode is an ascending, stable
//! sort on its key; the "newest first", "Z to A" and "longest first" modes
//! reverse that ascending result afterwards. Ties therefore come out in
//! reverse input order under the reversed modes, not in input order.
use crate::criteria::{CountrySort, FlightSort, PlaceSort};
use crate::date::DateKey;
use crate::model::{CompletedFlight, VisitedCountry, VisitedPlace};
use crate::text::normalize;

/// Stable ascending sort by `key`, then optionally reverse the whole slice.
fn sort_then_maybe_reverse<T, K, F>(items: &mut [T], key: F, reverse: bool)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.sort_by_cached_key(key);
    if reverse {
        items.reverse();
    }
}

pub fn sort_countries(countries: &[VisitedCountry], mode: CountrySort) -> Vec<VisitedCountry> {
    let mut out = countries.to_vec();
    let now = DateKey::now();
    let by_date = |c: &VisitedCountry| DateKey::parse_or(&c.last_visit_date, now);
    let by_name = |c: &VisitedCountry| normalize(c.common_name());
    match mode {
        CountrySort::DateOldestFirst => sort_then_maybe_reverse(&mut out, by_date, false),
        CountrySort::DateNewestFirst => sort_then_maybe_reverse(&mut out, by_date, true),
        CountrySort::NameAscending => sort_then_maybe_reverse(&mut out, by_name, false),
        CountrySort::NameDescending => sort_then_maybe_reverse(&mut out, by_name, true),
    }
    out
}

pub fn sort_flights(flights: &[CompletedFlight], mode: FlightSort) -> Vec<CompletedFlight> {
    let mut out = flights.to_vec();
    let now = DateKey::now();
    let by_date = |f: &CompletedFlight| DateKey::parse_or(&f.flight_date, now);
    let by_duration = |f: &CompletedFlight| f.duration.total_minutes();
    match mode {
        FlightSort::DateOldestFirst => sort_then_maybe_reverse(&mut out, by_date, false),
        FlightSort::DateNewestFirst => sort_then_maybe_reverse(&mut out, by_date, true),
        FlightSort::DurationShortestFirst => sort_then_maybe_reverse(&mut out, by_duration, false),
        FlightSort::DurationLongestFirst => sort_then_maybe_reverse(&mut out, by_duration, true),
    }
    out
}

pub fn sort_places(places: &[VisitedPlace], mode: PlaceSort) -> Vec<VisitedPlace> {
    let mut out = places.to_vec();
    let now = DateKey::now();
    let by_date = |p: &VisitedPlace| DateKey::parse_or(&p.last_visit_date, now);
    let by_name = |p: &VisitedPlace| normalize(p.name());
    match mode {
        PlaceSort::DateOldestFirst => sort_then_maybe_reverse(&mut out, by_date, false),
        PlaceSort::DateNewestFirst => sort_then_maybe_reverse(&mut out, by_date, true),
        PlaceSort::NameAscending => sort_then_maybe_reverse(&mut out, by_name, false),
        PlaceSort::NameDescending => sort_then_maybe_reverse(&mut out, by_name, true),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::FlightDuration;
    use crate::model::{Airport, City, Place, PlaceTarget};

    fn flight(id: &str, date: &str, h: u32, m: u32) -> CompletedFlight {
        let mut f = CompletedFlight::new(
            Airport::default(),
            Airport::default(),
            date,
            FlightDuration::new(h, m).unwrap(),
        );
        f.id = Some(id.into());
        f
    }

    fn ids(flights: &[CompletedFlight]) -> Vec<&str> {
        flights.iter().map(|f| f.id.as_deref().unwrap()).collect()
    }

    #[test]
    fn reversed_modes_flip_ties() {
        let flights = vec![
            flight("a", "01.01.2020", 1, 0),
            flight("b", "01.01.2020", 1, 0),
            flight("c", "02.01.2020", 1, 0),
        ];
        assert_eq!(ids(&sort_flights(&flights, FlightSort::DateOldestFirst)), ["a", "b", "c"]);
        assert_eq!(ids(&sort_flights(&flights, FlightSort::DateNewestFirst)), ["c", "b", "a"]);
    }

    #[test]
    fn duration_modes() {
        let flights = vec![
            flight("short", "01.01.2020", 0, 45),
            flight("long", "01.01.2020", 9, 5),
            flight("mid", "01.01.2020", 2, 0),
        ];
        assert_eq!(
            ids(&sort_flights(&flights, FlightSort::DurationShortestFirst)),
            ["short", "mid", "long"]
        );
        assert_eq!(
            ids(&sort_flights(&flights, FlightSort::DurationLongestFirst)),
            ["long", "mid", "short"]
        );
    }

    #[test]
    fn malformed_date_sorts_as_newest() {
        let flights = vec![
            flight("broken", "sometime", 1, 0),
            flight("old", "01.01.1999", 1, 0),
            flight("new", "01.01.2024", 1, 0),
        ];
        assert_eq!(
            ids(&sort_flights(&flights, FlightSort::DateNewestFirst)),
            ["broken", "new", "old"]
        );
    }

    #[test]
    fn place_names_sort_with_folded_diacritics() {
        let place = |name: &str| {
            VisitedPlace::new(
                PlaceTarget::Place(Place {
                    name: name.into(),
                    ..Default::default()
                }),
                "01.01.2020",
            )
        };
        let city = |name: &str| {
            VisitedPlace::new(
                PlaceTarget::City(City {
                    name: name.into(),
                    ..Default::default()
                }),
                "01.01.2020",
            )
        };
        let places = vec![city("Zvolen"), place("Žilina castle"), city("Andorra")];
        let sorted = sort_places(&places, PlaceSort::NameAscending);
        let names: Vec<_> = sorted.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Andorra", "Žilina castle", "Zvolen"]);
    }

    #[test]
    fn unresolved_countries_sort_first_by_name() {
        let countries = vec![
            VisitedCountry::new("XX", "01.01.2020", ""),
            VisitedCountry::new("YY", "01.01.2020", ""),
        ];
        let sorted = sort_countries(&countries, CountrySort::NameAscending);
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].country_code, "XX");
    }
}
