// crates/travellog-core/src/criteria.rs
//! Filter criteria and sort modes, one set per screen.
//!
//! Criteria keep the values exactly as the user typed them (the preference
//! store holds text); the filters parse bounds when they run.
use crate::model::Continent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which continents are checked on the country screen. All are checked by
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinentFilter {
    enabled: BTreeSet<Continent>,
}

impl Default for ContinentFilter {
    fn default() -> Self {
        Self {
            enabled: Continent::ALL.into_iter().collect(),
        }
    }
}

impl ContinentFilter {
    pub fn none() -> Self {
        Self {
            enabled: BTreeSet::new(),
        }
    }

    pub fn is_enabled(&self, c: Continent) -> bool {
        self.enabled.contains(&c)
    }

    pub fn set(&mut self, c: Continent, on: bool) {
        if on {
            self.enabled.insert(c);
        } else {
            self.enabled.remove(&c);
        }
    }

    pub fn with(mut self, c: Continent, on: bool) -> Self {
        self.set(c, on);
        self
    }

    /// `true` when every continent is checked, i.e. the filter is inactive.
    pub fn is_all(&self) -> bool {
        self.enabled.len() == Continent::ALL.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCriteria {
    pub search: String,
    pub continents: ContinentFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightCriteria {
    pub search: String,
    /// `dd.mm.yyyy`, inclusive.
    pub date_from: String,
    /// `dd.mm.yyyy`, inclusive.
    pub date_to: String,
    /// Whole minutes, inclusive.
    pub duration_from: String,
    /// Whole minutes, inclusive.
    pub duration_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCriteria {
    pub search: String,
    pub date_from: String,
    pub date_to: String,
    /// Include city records.
    pub city_checked: bool,
    /// Include place records.
    pub place_checked: bool,
}

impl Default for PlaceCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            city_checked: true,
            place_checked: true,
        }
    }
}

/// A closed set of sort modes with stable string keys for the preference
/// store.
pub trait SortMode: Copy + Default + PartialEq + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.key() == key)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountrySort {
    #[default]
    DateNewestFirst,
    DateOldestFirst,
    NameAscending,
    NameDescending,
}

impl SortMode for CountrySort {
    const ALL: &'static [Self] = &[
        CountrySort::DateNewestFirst,
        CountrySort::DateOldestFirst,
        CountrySort::NameAscending,
        CountrySort::NameDescending,
    ];

    fn key(self) -> &'static str {
        match self {
            CountrySort::DateNewestFirst => "date_newest_first",
            CountrySort::DateOldestFirst => "date_oldest_first",
            CountrySort::NameAscending => "name_asc",
            CountrySort::NameDescending => "name_desc",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightSort {
    #[default]
    DateNewestFirst,
    DateOldestFirst,
    DurationLongestFirst,
    DurationShortestFirst,
}

impl SortMode for FlightSort {
    const ALL: &'static [Self] = &[
        FlightSort::DateNewestFirst,
        FlightSort::DateOldestFirst,
        FlightSort::DurationLongestFirst,
        FlightSort::DurationShortestFirst,
    ];

    fn key(self) -> &'static str {
        match self {
            FlightSort::DateNewestFirst => "date_newest_first",
            FlightSort::DateOldestFirst => "date_oldest_first",
            FlightSort::DurationLongestFirst => "duration_longest_first",
            FlightSort::DurationShortestFirst => "duration_shortest_first",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceSort {
    #[default]
    DateNewestFirst,
    DateOldestFirst,
    NameAscending,
    NameDescending,
}

impl SortMode for PlaceSort {
    const ALL: &'static [Self] = &[
        PlaceSort::DateNewestFirst,
        PlaceSort::DateOldestFirst,
        PlaceSort::NameAscending,
        PlaceSort::NameDescending,
    ];

    fn key(self) -> &'static str {
        match self {
            PlaceSort::DateNewestFirst => "date_newest_first",
            PlaceSort::DateOldestFirst => "date_oldest_first",
            PlaceSort::NameAscending => "name_asc",
            PlaceSort::NameDescending => "name_desc",
        }
    }
}
