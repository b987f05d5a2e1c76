// crates/travellog-core/src/prefs.rs
//! Preference store access.
//!
//! The store itself is an external key/value collaborator. This module owns
//! the key layout (`<kind>.<field>`, e.g. `flight.date_from` or
//! `country.continent.north_america`), the defaults for absent values, and
//! the mapping between stored text and typed criteria.
use crate::criteria::{
    CountryCriteria, CountrySort, FlightCriteria, FlightSort, PlaceCriteria, PlaceSort, SortMode,
};
use crate::error::{Result, TravelError};
use crate::model::Continent;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable key/value store for the last chosen criteria and sort modes.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// -----------------------------------------------------------------------------
// KEY TABLE
// -----------------------------------------------------------------------------

/// The three record screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Country,
    Flight,
    Place,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Country, EntityKind::Flight, EntityKind::Place];

    pub fn key(self) -> &'static str {
        match self {
            EntityKind::Country => "country",
            EntityKind::Flight => "flight",
            EntityKind::Place => "place",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Every preference field this screen persists.
    pub fn fields(self) -> Vec<PrefField> {
        match self {
            EntityKind::Country => {
                let mut f = vec![PrefField::Search];
                f.extend(Continent::ALL.into_iter().map(PrefField::Continent));
                f.push(PrefField::Sort);
                f
            }
            EntityKind::Flight => vec![
                PrefField::Search,
                PrefField::DateFrom,
                PrefField::DateTo,
                PrefField::DurationFrom,
                PrefField::DurationTo,
                PrefField::Sort,
            ],
            EntityKind::Place => vec![
                PrefField::Search,
                PrefField::DateFrom,
                PrefField::DateTo,
                PrefField::CityChecked,
                PrefField::PlaceChecked,
                PrefField::Sort,
            ],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single persisted filter field or the sort mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefField {
    Search,
    DateFrom,
    DateTo,
    DurationFrom,
    DurationTo,
    CityChecked,
    PlaceChecked,
    Continent(Continent),
    Sort,
}

impl PrefField {
    pub fn key(self) -> String {
        match self {
            PrefField::Search => "search".into(),
            PrefField::DateFrom => "date_from".into(),
            PrefField::DateTo => "date_to".into(),
            PrefField::DurationFrom => "duration_from".into(),
            PrefField::DurationTo => "duration_to".into(),
            PrefField::CityChecked => "city_checked".into(),
            PrefField::PlaceChecked => "place_checked".into(),
            PrefField::Continent(c) => format!("continent.{}", c.key()),
            PrefField::Sort => "sort".into(),
        }
    }

    /// Resolves a field key valid for `kind`.
    pub fn parse(kind: EntityKind, key: &str) -> Option<Self> {
        kind.fields().into_iter().find(|f| f.key() == key)
    }

    pub fn is_flag(self) -> bool {
        matches!(
            self,
            PrefField::CityChecked | PrefField::PlaceChecked | PrefField::Continent(_)
        )
    }
}

pub fn pref_key(kind: EntityKind, field: PrefField) -> String {
    format!("{}.{}", kind.key(), field.key())
}

// -----------------------------------------------------------------------------
// TYPED ACCESSORS
// -----------------------------------------------------------------------------

/// Typed reads and writes on top of any [`PreferenceStore`].
///
/// Absent values read as their defaults: blank text, `true` for inclusion
/// flags, and the kind's default sort mode ("newest first").
///
/// ```rust
/// use travellog_core::criteria::FlightSort;
/// use travellog_core::prefs::{EntityKind, MemoryPreferences, PrefField, PreferenceStoreExt};
///
/// let mut store = MemoryPreferences::default();
/// assert!(store.read_flag(EntityKind::Place, PrefField::CityChecked));
/// store.write_sort(EntityKind::Flight, FlightSort::DurationLongestFirst).unwrap();
/// assert_eq!(
///     store.read_sort::<FlightSort>(EntityKind::Flight),
///     FlightSort::DurationLongestFirst
/// );
/// ```
pub trait PreferenceStoreExt: PreferenceStore {
    fn read_text(&self, kind: EntityKind, field: PrefField) -> String {
        self.get(&pref_key(kind, field)).unwrap_or_default()
    }

    fn read_flag(&self, kind: EntityKind, field: PrefField) -> bool {
        let key = pref_key(kind, field);
        match self.get(&key).as_deref() {
            None => true,
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                tracing::debug!(key = %key, value = other, "uninterpretable flag, using default");
                true
            }
        }
    }

    fn read_sort<M: SortMode>(&self, kind: EntityKind) -> M {
        let key = pref_key(kind, PrefField::Sort);
        match self.get(&key) {
            None => M::default(),
            Some(v) => M::from_key(&v).unwrap_or_else(|| {
                tracing::debug!(key = %key, value = %v, "unknown sort mode, using default");
                M::default()
            }),
        }
    }

    fn write_text(&mut self, kind: EntityKind, field: PrefField, value: &str) -> Result<()> {
        self.set(&pref_key(kind, field), value)
    }

    fn write_flag(&mut self, kind: EntityKind, field: PrefField, value: bool) -> Result<()> {
        self.set(&pref_key(kind, field), if value { "true" } else { "false" })
    }

    fn write_sort<M: SortMode>(&mut self, kind: EntityKind, mode: M) -> Result<()> {
        self.set(&pref_key(kind, PrefField::Sort), mode.key())
    }

    /// Validates and writes a raw `field = value` pair, as typed on a
    /// command line or in a settings screen.
    fn write_raw(&mut self, kind: EntityKind, field: &str, value: &str) -> Result<()> {
        let f = PrefField::parse(kind, field).ok_or_else(|| {
            TravelError::Preference(format!("unknown field {field:?} for {kind}"))
        })?;
        if f.is_flag() && value != "true" && value != "false" {
            return Err(TravelError::Preference(format!(
                "{} expects true or false, got {value:?}",
                pref_key(kind, f)
            )));
        }
        if f == PrefField::Sort && !is_sort_key(kind, value) {
            return Err(TravelError::Preference(format!(
                "unknown sort mode {value:?} for {kind}"
            )));
        }
        self.set(&pref_key(kind, f), value)
    }

    /// Every key of `kind` with its effective value (stored or default).
    fn snapshot(&self, kind: EntityKind) -> Vec<(String, String)> {
        kind.fields()
            .into_iter()
            .map(|f| {
                let key = pref_key(kind, f);
                let value = self.get(&key).unwrap_or_else(|| default_value(kind, f));
                (key, value)
            })
            .collect()
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStoreExt for S {}

fn is_sort_key(kind: EntityKind, value: &str) -> bool {
    match kind {
        EntityKind::Country => CountrySort::from_key(value).is_some(),
        EntityKind::Flight => FlightSort::from_key(value).is_some(),
        EntityKind::Place => PlaceSort::from_key(value).is_some(),
    }
}

fn default_value(kind: EntityKind, field: PrefField) -> String {
    if field.is_flag() {
        return "true".into();
    }
    match (field, kind) {
        (PrefField::Sort, EntityKind::Country) => CountrySort::default().key().into(),
        (PrefField::Sort, EntityKind::Flight) => FlightSort::default().key().into(),
        (PrefField::Sort, EntityKind::Place) => PlaceSort::default().key().into(),
        _ => String::new(),
    }
}

// -----------------------------------------------------------------------------
// CRITERIA <-> STORE
// -----------------------------------------------------------------------------

/// Criteria that can be read from and written to a preference store.
pub trait StoredCriteria: Sized {
    const KIND: EntityKind;

    fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self;
    fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> Result<()>;
}

impl StoredCriteria for CountryCriteria {
    const KIND: EntityKind = EntityKind::Country;

    fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let mut c = CountryCriteria {
            search: store.read_text(Self::KIND, PrefField::Search),
            ..Default::default()
        };
        for cont in Continent::ALL {
            c.continents
                .set(cont, store.read_flag(Self::KIND, PrefField::Continent(cont)));
        }
        c
    }

    fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.write_text(Self::KIND, PrefField::Search, &self.search)?;
        for cont in Continent::ALL {
            store.write_flag(
                Self::KIND,
                PrefField::Continent(cont),
                self.continents.is_enabled(cont),
            )?;
        }
        Ok(())
    }
}

impl StoredCriteria for FlightCriteria {
    const KIND: EntityKind = EntityKind::Flight;

    fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        FlightCriteria {
            search: store.read_text(Self::KIND, PrefField::Search),
            date_from: store.read_text(Self::KIND, PrefField::DateFrom),
            date_to: store.read_text(Self::KIND, PrefField::DateTo),
            duration_from: store.read_text(Self::KIND, PrefField::DurationFrom),
            duration_to: store.read_text(Self::KIND, PrefField::DurationTo),
        }
    }

    fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.write_text(Self::KIND, PrefField::Search, &self.search)?;
        store.write_text(Self::KIND, PrefField::DateFrom, &self.date_from)?;
        store.write_text(Self::KIND, PrefField::DateTo, &self.date_to)?;
        store.write_text(Self::KIND, PrefField::DurationFrom, &self.duration_from)?;
        store.write_text(Self::KIND, PrefField::DurationTo, &self.duration_to)
    }
}

impl StoredCriteria for PlaceCriteria {
    const KIND: EntityKind = EntityKind::Place;

    fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        PlaceCriteria {
            search: store.read_text(Self::KIND, PrefField::Search),
            date_from: store.read_text(Self::KIND, PrefField::DateFrom),
            date_to: store.read_text(Self::KIND, PrefField::DateTo),
            city_checked: store.read_flag(Self::KIND, PrefField::CityChecked),
            place_checked: store.read_flag(Self::KIND, PrefField::PlaceChecked),
        }
    }

    fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.write_text(Self::KIND, PrefField::Search, &self.search)?;
        store.write_text(Self::KIND, PrefField::DateFrom, &self.date_from)?;
        store.write_text(Self::KIND, PrefField::DateTo, &self.date_to)?;
        store.write_flag(Self::KIND, PrefField::CityChecked, self.city_checked)?;
        store.write_flag(Self::KIND, PrefField::PlaceChecked, self.place_checked)
    }
}

// -----------------------------------------------------------------------------
// STORES
// -----------------------------------------------------------------------------

/// Process-local store, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Flat JSON object on disk, rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Opens the store; a missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(TravelError::Io(e)),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&self.values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
