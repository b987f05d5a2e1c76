// crates/travellog-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip, binary caches) for the reference
//! catalog, border documents and the local record file used by the CLI.

use crate::catalog::CountryCatalog;
use crate::error::Result;
use crate::geometry::{BorderGeometry, BorderIndex};
use crate::model::{CompletedFlight, Country, VisitedCountry, VisitedPlace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

mod cache;
pub mod common_io;

pub use cache::{is_cache_fresh, read_cache, write_cache};

#[cfg(not(feature = "compact"))]
pub const BORDER_CACHE_SUFFIX: &str = ".borders.bin";
#[cfg(feature = "compact")]
pub const BORDER_CACHE_SUFFIX: &str = ".borders.comp.bin";

/// A user's three record collections as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub countries: Vec<VisitedCountry>,
    #[serde(default)]
    pub flights: Vec<CompletedFlight>,
    #[serde(default)]
    pub places: Vec<VisitedPlace>,
}

/// Reads the country catalog (a JSON array, optionally gzipped).
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CountryCatalog> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let countries: Vec<Country> = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), count = countries.len(), "loaded country catalog");
    CountryCatalog::from_countries(countries)
}

pub fn load_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    let reader = common_io::open_stream(path.as_ref())?;
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a sibling temp file and renames it over `path`, so the record
/// file is either the old or the new version, never a partial one.
pub fn save_records(path: impl AsRef<Path>, records: &RecordSet) -> Result<()> {
    let path = path.as_ref();
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(records)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl BorderIndex {
    /// One JSON object keyed by ISO-2 code: `{"SK": {"coordinates": ...}}`.
    pub fn load_json_map(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        let map: HashMap<String, BorderGeometry> = serde_json::from_reader(reader)?;
        Ok(map.into_iter().collect())
    }

    /// A directory of `<ISO2>.json` or `<ISO2>.json.gz` documents. Other
    /// files are ignored; a malformed document is logged and skipped.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut idx = BorderIndex::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(code) = common_io::json_stem(&path) else {
                continue;
            };
            let reader = common_io::open_stream(&path)?;
            match serde_json::from_reader::<_, BorderGeometry>(reader) {
                Ok(geom) => idx.insert(code, geom),
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "skipping malformed border document");
                }
            }
        }
        tracing::debug!(dir = %dir.display(), count = idx.len(), "loaded border documents");
        Ok(idx)
    }

    /// **Smart Load:** uses the binary cache next to `path` while it is
    /// fresh, otherwise parses the JSON source (directory or single map
    /// file) and rewrites the cache. Cache write failures are not fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, BORDER_CACHE_SUFFIX);

        if is_cache_fresh(path, &cache_path) {
            match read_cache::<BorderIndex>(&cache_path) {
                Ok(idx) => return Ok(idx),
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable border cache"),
            }
        }

        let idx = if path.is_dir() {
            Self::load_dir(path)?
        } else {
            Self::load_json_map(path)?
        };

        if let Err(e) = write_cache(&cache_path, &idx) {
            tracing::warn!(error = %e, cache = %cache_path.display(), "could not write border cache");
        }
        Ok(idx)
    }
}
