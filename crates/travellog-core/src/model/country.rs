// crates/travellog-core/src/model/country.rs
use super::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The seven continents a country can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Europe,
    Asia,
    Africa,
    Oceania,
    Antarctica,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Europe,
        Continent::Asia,
        Continent::Africa,
        Continent::Oceania,
        Continent::Antarctica,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
    ];

    /// Stable snake_case key, used in preference keys.
    pub fn key(self) -> &'static str {
        match self {
            Continent::Europe => "europe",
            Continent::Asia => "asia",
            Continent::Africa => "africa",
            Continent::Oceania => "oceania",
            Continent::Antarctica => "antarctica",
            Continent::NorthAmerica => "north_america",
            Continent::SouthAmerica => "south_america",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A common/official name pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NameVariant {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Country names: the English pair plus native variants keyed by language
/// code (`"slk"`, `"deu"`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(rename = "nativeName", default)]
    pub native_name: BTreeMap<String, NameVariant>,
}

/// A country from the reference catalog. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "cca2")]
    pub iso2: String,
    pub name: CountryName,
    /// Display translations keyed by language code.
    #[serde(default)]
    pub translations: BTreeMap<String, NameVariant>,
    #[serde(default)]
    pub continents: BTreeSet<Continent>,
    /// Stored as `[lat, lng]`.
    #[serde(rename = "latlng", default)]
    pub centroid: [f64; 2],
    #[serde(default)]
    pub independent: Option<bool>,
}

impl Country {
    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    /// Name for display in `lang`: translation first, then the native name,
    /// then the English common name.
    pub fn display_name(&self, lang: &str) -> &str {
        self.translations
            .get(lang)
            .or_else(|| self.name.native_name.get(lang))
            .map(|v| v.common.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name.common)
    }

    pub fn centroid(&self) -> LatLng {
        LatLng::new(self.centroid[0], self.centroid[1])
    }

    /// Missing flag counts as not independent.
    pub fn is_independent(&self) -> bool {
        self.independent.unwrap_or(false)
    }

    pub fn is_on(&self, continent: Continent) -> bool {
        self.continents.contains(&continent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOVAKIA: &str = r#"{
        "cca2": "SK",
        "name": {
            "common": "Slovakia",
            "official": "Slovak Republic",
            "nativeName": { "slk": { "common": "Slovensko", "official": "Slovenská republika" } }
        },
        "translations": { "deu": { "common": "Slowakei", "official": "Slowakische Republik" } },
        "continents": ["Europe"],
        "latlng": [48.66666666, 19.5],
        "independent": true
    }"#;

    #[test]
    fn deserializes_catalog_entry() {
        let c: Country = serde_json::from_str(SLOVAKIA).unwrap();
        assert_eq!(c.iso2(), "SK");
        assert!(c.is_on(Continent::Europe));
        assert!(c.is_independent());
        assert_eq!(c.centroid().lng, 19.5);
    }

    #[test]
    fn display_name_falls_back() {
        let c: Country = serde_json::from_str(SLOVAKIA).unwrap();
        assert_eq!(c.display_name("deu"), "Slowakei");
        assert_eq!(c.display_name("slk"), "Slovensko");
        assert_eq!(c.display_name("fra"), "Slovakia");
    }

    #[test]
    fn continent_names_round_trip_through_keys() {
        for c in Continent::ALL {
            assert_eq!(Continent::from_key(c.key()), Some(c));
        }
        let na: Continent = serde_json::from_str("\"North America\"").unwrap();
        assert_eq!(na, Continent::NorthAmerica);
    }

    #[test]
    fn missing_optional_fields_default() {
        let c: Country =
            serde_json::from_str(r#"{"cca2":"XK","name":{"common":"Kosovo"}}"#).unwrap();
        assert!(c.continents.is_empty());
        assert!(!c.is_independent());
    }
}
