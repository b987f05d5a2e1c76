// crates/travellog-core/src/filter.rs
//! Record filters, one per screen.
//!
//! Every filter takes the full collection and returns a new, narrowed copy
//! in input order. Predicates are AND-ed; a blank or unparsable criterion
//! value switches its predicate off rather than excluding everything.
//!
//! Search is a plain case-sensitive `contains` on the text as typed.
use crate::criteria::{CountryCriteria, FlightCriteria, PlaceCriteria};
use crate::date::{within, DateKey};
use crate::duration::parse_minutes_bound;
use crate::model::{CompletedFlight, Country, PlaceKind, VisitedCountry, VisitedPlace};
use crate::text::is_blank;
use std::sync::Arc;

// -----------------------------------------------------------------------------
// COUNTRIES
// -----------------------------------------------------------------------------

/// Country predicate, shared by the visited-country screen and the catalog.
///
/// - name: `name.common` or `name.official` contains the search text;
/// - continents: the country's continent set intersects the checked set.
///   A country without continent data is never excluded by continent.
///
/// An unresolved country (`None`) has a blank name and no continents.
pub fn country_matches(country: Option<&Country>, criteria: &CountryCriteria) -> bool {
    name_matches(country, &criteria.search) && continents_match(country, criteria)
}

fn name_matches(country: Option<&Country>, search: &str) -> bool {
    if is_blank(search) {
        return true;
    }
    country.is_some_and(|c| c.name.common.contains(search) || c.name.official.contains(search))
}

fn continents_match(country: Option<&Country>, criteria: &CountryCriteria) -> bool {
    let Some(c) = country else {
        return true;
    };
    c.continents.is_empty()
        || c.continents
            .iter()
            .any(|cont| criteria.continents.is_enabled(*cont))
}

pub fn filter_countries(
    countries: &[VisitedCountry],
    criteria: &CountryCriteria,
) -> Vec<VisitedCountry> {
    countries
        .iter()
        .filter(|vc| country_matches(vc.country(), criteria))
        .cloned()
        .collect()
}

/// Filters catalog entries (the "add a country" picker).
///
/// With `independent_only` set, non-independent territories are dropped too.
pub fn filter_catalog(
    countries: &[Arc<Country>],
    criteria: &CountryCriteria,
    independent_only: bool,
) -> Vec<Arc<Country>> {
    countries
        .iter()
        .filter(|c| !independent_only || c.is_independent())
        .filter(|c| {
            let country: &Country = c;
            country_matches(Some(country), criteria)
        })
        .cloned()
        .collect()
}

// -----------------------------------------------------------------------------
// FLIGHTS
// -----------------------------------------------------------------------------

/// Flight criteria with bounds parsed once.
#[derive(Debug, Clone)]
pub struct FlightPredicate<'a> {
    search: &'a str,
    date_from: Option<DateKey>,
    date_to: Option<DateKey>,
    min_minutes: Option<u64>,
    max_minutes: Option<u64>,
    now: DateKey,
}

impl<'a> FlightPredicate<'a> {
    pub fn new(criteria: &'a FlightCriteria) -> Self {
        Self {
            search: &criteria.search,
            date_from: DateKey::parse_bound(&criteria.date_from),
            date_to: DateKey::parse_bound(&criteria.date_to),
            min_minutes: parse_minutes_bound(&criteria.duration_from),
            max_minutes: parse_minutes_bound(&criteria.duration_to),
            now: DateKey::now(),
        }
    }

    /// Airport name or city (departure or arrival) contains the search
    /// text, the flight date lies within the date range, and the total
    /// duration lies within the minute range.
    pub fn matches(&self, f: &CompletedFlight) -> bool {
        self.search_matches(f) && self.date_matches(f) && self.duration_matches(f)
    }

    fn search_matches(&self, f: &CompletedFlight) -> bool {
        if is_blank(self.search) {
            return true;
        }
        let q = self.search;
        f.arrival_airport.name.contains(q)
            || f.arrival_airport.city.contains(q)
            || f.departure_airport.name.contains(q)
            || f.departure_airport.city.contains(q)
    }

    fn date_matches(&self, f: &CompletedFlight) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        let key = DateKey::parse_or(&f.flight_date, self.now);
        within(key, self.date_from, self.date_to)
    }

    fn duration_matches(&self, f: &CompletedFlight) -> bool {
        let total = f.duration.total_minutes();
        self.min_minutes.map_or(true, |min| total >= min)
            && self.max_minutes.map_or(true, |max| total <= max)
    }
}

pub fn filter_flights(flights: &[CompletedFlight], criteria: &FlightCriteria) -> Vec<CompletedFlight> {
    let pred = FlightPredicate::new(criteria);
    flights.iter().filter(|f| pred.matches(f)).cloned().collect()
}

// -----------------------------------------------------------------------------
// PLACES
// -----------------------------------------------------------------------------

/// Place criteria with bounds parsed once.
#[derive(Debug, Clone)]
pub struct PlacePredicate<'a> {
    search: &'a str,
    date_from: Option<DateKey>,
    date_to: Option<DateKey>,
    city_checked: bool,
    place_checked: bool,
    now: DateKey,
}

impl<'a> PlacePredicate<'a> {
    pub fn new(criteria: &'a PlaceCriteria) -> Self {
        Self {
            search: &criteria.search,
            date_from: DateKey::parse_bound(&criteria.date_from),
            date_to: DateKey::parse_bound(&criteria.date_to),
            city_checked: criteria.city_checked,
            place_checked: criteria.place_checked,
            now: DateKey::now(),
        }
    }

    /// City or place name contains the search text, the last visit lies
    /// within the date range, and the record's kind is checked. The two
    /// kind toggles are independent of each other.
    pub fn matches(&self, p: &VisitedPlace) -> bool {
        let kind_ok = match p.kind() {
            PlaceKind::City => self.city_checked,
            PlaceKind::Place => self.place_checked,
        };
        if !kind_ok {
            return false;
        }
        if !is_blank(self.search) && !p.name().contains(self.search) {
            return false;
        }
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        within(
            DateKey::parse_or(&p.last_visit_date, self.now),
            self.date_from,
            self.date_to,
        )
    }
}

pub fn filter_places(places: &[VisitedPlace], criteria: &PlaceCriteria) -> Vec<VisitedPlace> {
    let pred = PlacePredicate::new(criteria);
    places.iter().filter(|p| pred.matches(p)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::ContinentFilter;
    use crate::duration::FlightDuration;
    use crate::model::{Airport, City, Continent, CountryName, Place, PlaceTarget};

    fn country(iso2: &str, common: &str, official: &str, continents: &[Continent]) -> Arc<Country> {
        Arc::new(Country {
            iso2: iso2.into(),
            name: CountryName {
                common: common.into(),
                official: official.into(),
                native_name: Default::default(),
            },
            translations: Default::default(),
            continents: continents.iter().copied().collect(),
            centroid: [0.0, 0.0],
            independent: Some(true),
        })
    }

    fn airport(name: &str, city: &str) -> Airport {
        Airport {
            name: name.into(),
            city: city.into(),
            ..Default::default()
        }
    }

    #[test]
    fn country_search_is_case_sensitive_on_either_name() {
        let sk = country("SK", "Slovakia", "Slovak Republic", &[Continent::Europe]);
        let mut c = CountryCriteria::default();
        c.search = "Republic".into();
        assert!(country_matches(Some(&*sk), &c));
        c.search = "republic".into();
        assert!(!country_matches(Some(&*sk), &c));
    }

    #[test]
    fn multi_continent_country_survives_while_one_continent_is_checked() {
        let tr = country("TR", "Turkey", "Republic of Turkey", &[Continent::Europe, Continent::Asia]);
        let c = CountryCriteria {
            search: String::new(),
            continents: ContinentFilter::default().with(Continent::Europe, false),
        };
        assert!(country_matches(Some(&*tr), &c));

        let c = CountryCriteria {
            search: String::new(),
            continents: ContinentFilter::none().with(Continent::Africa, true),
        };
        assert!(!country_matches(Some(&*tr), &c));
    }

    #[test]
    fn unresolved_country_only_fails_a_search() {
        let c = CountryCriteria {
            search: String::new(),
            continents: ContinentFilter::none(),
        };
        assert!(country_matches(None, &c));
        let c = CountryCriteria {
            search: "Slo".into(),
            ..Default::default()
        };
        assert!(!country_matches(None, &c));
    }

    #[test]
    fn catalog_filter_can_hide_territories() {
        let sk = country("SK", "Slovakia", "Slovak Republic", &[Continent::Europe]);
        let mut gl = (*country("GL", "Greenland", "Greenland", &[Continent::NorthAmerica])).clone();
        gl.independent = Some(false);
        let all = vec![sk, Arc::new(gl)];
        assert_eq!(filter_catalog(&all, &CountryCriteria::default(), true).len(), 1);
        assert_eq!(filter_catalog(&all, &CountryCriteria::default(), false).len(), 2);
    }

    #[test]
    fn flight_search_checks_all_four_fields() {
        let f = CompletedFlight::new(
            airport("M. R. Štefánik", "Bratislava"),
            airport("Heathrow", "London"),
            "01.01.2020",
            FlightDuration::default(),
        );
        for q in ["Štefánik", "Bratislava", "Heathrow", "London"] {
            let c = FlightCriteria {
                search: q.into(),
                ..Default::default()
            };
            assert!(FlightPredicate::new(&c).matches(&f), "{q}");
        }
        let c = FlightCriteria {
            search: "london".into(),
            ..Default::default()
        };
        assert!(!FlightPredicate::new(&c).matches(&f));
    }

    #[test]
    fn flight_date_and_duration_bounds_are_inclusive() {
        let f = CompletedFlight::new(
            airport("A", "a"),
            airport("B", "b"),
            "15.06.2021",
            FlightDuration::new(1, 30).unwrap(),
        );
        let c = FlightCriteria {
            date_from: "15.06.2021".into(),
            date_to: "15.06.2021".into(),
            duration_from: "90".into(),
            duration_to: "90".into(),
            ..Default::default()
        };
        assert!(FlightPredicate::new(&c).matches(&f));

        let c = FlightCriteria {
            duration_from: "91".into(),
            ..Default::default()
        };
        assert!(!FlightPredicate::new(&c).matches(&f));
    }

    #[test]
    fn unparsable_flight_bounds_are_skipped() {
        let f = CompletedFlight::new(
            airport("A", "a"),
            airport("B", "b"),
            "15.06.2021",
            FlightDuration::new(0, 10).unwrap(),
        );
        let c = FlightCriteria {
            date_from: "tomorrow".into(),
            duration_from: "lots".into(),
            duration_to: "".into(),
            ..Default::default()
        };
        assert!(FlightPredicate::new(&c).matches(&f));
    }

    #[test]
    fn place_kind_toggles_are_independent() {
        let city = VisitedPlace::new(
            PlaceTarget::City(City {
                name: "Prešov".into(),
                ..Default::default()
            }),
            "01.01.2020",
        );
        let place = VisitedPlace::new(
            PlaceTarget::Place(Place {
                name: "Spiš Castle".into(),
                ..Default::default()
            }),
            "01.01.2020",
        );
        let all = vec![city, place];

        let both_off = PlaceCriteria {
            city_checked: false,
            place_checked: false,
            ..Default::default()
        };
        assert!(filter_places(&all, &both_off).is_empty());
        assert_eq!(filter_places(&all, &PlaceCriteria::default()).len(), 2);
    }

    #[test]
    fn place_date_range() {
        let p = VisitedPlace::new(
            PlaceTarget::Place(Place {
                name: "Tatras".into(),
                ..Default::default()
            }),
            "10.10.2019",
        );
        let c = PlaceCriteria {
            date_to: "09.10.2019".into(),
            ..Default::default()
        };
        assert!(!PlacePredicate::new(&c).matches(&p));
        let c = PlaceCriteria {
            date_from: "10.10.2019".into(),
            ..Default::default()
        };
        assert!(PlacePredicate::new(&c).matches(&p));
    }
}
