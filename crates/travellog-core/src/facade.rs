// crates/travellog-core/src/facade.rs
//! Per-screen refresh: read criteria and sort mode from the preference
//! store, filter, then sort.
//!
//! The facade keeps no state besides the store handle. Criteria are read on
//! every call, so changes written by someone else show up on the next
//! refresh.
use crate::criteria::{
    CountryCriteria, CountrySort, FlightCriteria, FlightSort, PlaceCriteria, PlaceSort, SortMode,
};
use crate::error::Result;
use crate::filter::{filter_countries, filter_flights, filter_places};
use crate::geometry::{BorderGeometryBuilder, BorderSource, Ring};
use crate::model::{CompletedFlight, VisitedCountry, VisitedPlace};
use crate::prefs::{EntityKind, PreferenceStore, PreferenceStoreExt, StoredCriteria};
use crate::session::UserSession;
use crate::sort::{sort_countries, sort_flights, sort_places};

/// One record screen: its item type, criteria, sort modes and the concrete
/// filter and sorter that implement them.
pub trait Screen {
    type Item: Clone;
    type Criteria: StoredCriteria + Default;
    type Sort: SortMode;

    const KIND: EntityKind;

    fn filter(items: &[Self::Item], criteria: &Self::Criteria) -> Vec<Self::Item>;
    fn sort(items: &[Self::Item], mode: Self::Sort) -> Vec<Self::Item>;
}

pub struct CountryScreen;
pub struct FlightScreen;
pub struct PlaceScreen;

impl Screen for CountryScreen {
    type Item = VisitedCountry;
    type Criteria = CountryCriteria;
    type Sort = CountrySort;
    const KIND: EntityKind = EntityKind::Country;

    fn filter(items: &[VisitedCountry], criteria: &CountryCriteria) -> Vec<VisitedCountry> {
        filter_countries(items, criteria)
    }

    fn sort(items: &[VisitedCountry], mode: CountrySort) -> Vec<VisitedCountry> {
        sort_countries(items, mode)
    }
}

impl Screen for FlightScreen {
    type Item = CompletedFlight;
    type Criteria = FlightCriteria;
    type Sort = FlightSort;
    const KIND: EntityKind = EntityKind::Flight;

    fn filter(items: &[CompletedFlight], criteria: &FlightCriteria) -> Vec<CompletedFlight> {
        filter_flights(items, criteria)
    }

    fn sort(items: &[CompletedFlight], mode: FlightSort) -> Vec<CompletedFlight> {
        sort_flights(items, mode)
    }
}

impl Screen for PlaceScreen {
    type Item = VisitedPlace;
    type Criteria = PlaceCriteria;
    type Sort = PlaceSort;
    const KIND: EntityKind = EntityKind::Place;

    fn filter(items: &[VisitedPlace], criteria: &PlaceCriteria) -> Vec<VisitedPlace> {
        filter_places(items, criteria)
    }

    fn sort(items: &[VisitedPlace], mode: PlaceSort) -> Vec<VisitedPlace> {
        sort_places(items, mode)
    }
}

pub struct FilterSortFacade<S> {
    store: S,
}

impl<S: PreferenceStore> FilterSortFacade<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn criteria<K: Screen>(&self) -> K::Criteria {
        K::Criteria::load(&self.store)
    }

    pub fn sort_mode<K: Screen>(&self) -> K::Sort {
        self.store.read_sort::<K::Sort>(K::KIND)
    }

    /// Filter then sort `full` with the criteria currently in the store.
    pub fn refresh<K: Screen>(&self, full: &[K::Item]) -> Vec<K::Item> {
        let criteria = self.criteria::<K>();
        let mode = self.sort_mode::<K>();
        let filtered = K::filter(full, &criteria);
        tracing::debug!(
            screen = %K::KIND,
            total = full.len(),
            kept = filtered.len(),
            sort = mode.key(),
            "refreshed"
        );
        K::sort(&filtered, mode)
    }

    /// [`refresh`](Self::refresh), replacing the contents of `out`.
    pub fn refresh_into<K: Screen>(&self, full: &[K::Item], out: &mut Vec<K::Item>) {
        *out = self.refresh::<K>(full);
    }

    pub fn save_criteria<K: Screen>(&mut self, criteria: &K::Criteria) -> Result<()> {
        criteria.save(&mut self.store)
    }

    pub fn save_sort<K: Screen>(&mut self, mode: K::Sort) -> Result<()> {
        self.store.write_sort(K::KIND, mode)
    }

    /// Writes default criteria and the default sort mode, then returns the
    /// whole collection in default order.
    pub fn reset<K: Screen>(&mut self, full: &[K::Item]) -> Result<Vec<K::Item>> {
        K::Criteria::default().save(&mut self.store)?;
        self.store.write_sort(K::KIND, K::Sort::default())?;
        tracing::debug!(screen = %K::KIND, "criteria reset");
        Ok(K::sort(full, K::Sort::default()))
    }

    pub fn refresh_countries(&self, full: &[VisitedCountry]) -> Vec<VisitedCountry> {
        self.refresh::<CountryScreen>(full)
    }

    pub fn refresh_flights(&self, full: &[CompletedFlight]) -> Vec<CompletedFlight> {
        self.refresh::<FlightScreen>(full)
    }

    pub fn refresh_places(&self, full: &[VisitedPlace]) -> Vec<VisitedPlace> {
        self.refresh::<PlaceScreen>(full)
    }
}

/// Border rings for the map: the homeland separately from visited
/// countries, so the renderer can style them apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapOverlay {
    pub homeland: Vec<Ring>,
    pub visited: Vec<Ring>,
}

/// Builds border rings for the session's homeland and every visited
/// country, in collection order.
pub fn map_overlay<B: BorderSource + ?Sized>(
    session: &UserSession,
    visited: &[VisitedCountry],
    borders: &B,
) -> MapOverlay {
    let builder = BorderGeometryBuilder::new(borders);
    MapOverlay {
        homeland: session.homeland().map(|h| builder.build(h)).unwrap_or_default(),
        visited: builder.build_batch(visited.iter().map(|v| v.country_code.as_str())),
    }
}
