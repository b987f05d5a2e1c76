// crates/travellog-core/src/catalog.rs
use crate::error::{Result, TravelError};
use crate::model::{Country, VisitedCountry};
use crate::text::fold_key;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The reference country catalog. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<Arc<Country>>,
    by_iso2: HashMap<String, usize>,
}

impl CountryCatalog {
    /// Builds the catalog; ISO-2 codes must be unique.
    pub fn from_countries(countries: Vec<Country>) -> Result<Self> {
        let mut by_iso2 = HashMap::with_capacity(countries.len());
        let mut out = Vec::with_capacity(countries.len());
        for c in countries {
            let key = c.iso2.to_ascii_uppercase();
            if by_iso2.contains_key(&key) {
                return Err(TravelError::InvalidData(format!(
                    "duplicate country code in catalog: {key}"
                )));
            }
            by_iso2.insert(key, out.len());
            out.push(Arc::new(c));
        }
        Ok(Self {
            countries: out,
            by_iso2,
        })
    }

    pub fn countries(&self) -> &[Arc<Country>] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Case-insensitive ISO-2 lookup (`"sk"`, `"SK"`).
    pub fn find_by_iso2(&self, iso2: &str) -> Option<&Arc<Country>> {
        self.by_iso2
            .get(&iso2.trim().to_ascii_uppercase())
            .map(|&i| &self.countries[i])
    }

    /// Independent states only, the default catalog view.
    pub fn independent(&self) -> Vec<Arc<Country>> {
        self.countries
            .iter()
            .filter(|c| c.is_independent())
            .cloned()
            .collect()
    }

    /// Accent- and case-insensitive search over common, official and
    /// translated names. A blank query returns the whole catalog.
    pub fn search(&self, query: &str) -> Vec<Arc<Country>> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return self.countries.clone();
        }
        self.countries
            .iter()
            .filter(|c| {
                fold_key(&c.name.common).contains(&q)
                    || fold_key(&c.name.official).contains(&q)
                    || c.translations
                        .values()
                        .any(|t| fold_key(&t.common).contains(&q))
            })
            .cloned()
            .collect()
    }

    /// Links each visited country to its catalog entry. Codes the catalog
    /// does not know are left unresolved. Returns how many were missed.
    pub fn resolve(&self, visited: &mut [VisitedCountry]) -> usize {
        let mut missed = 0;
        for vc in visited.iter_mut() {
            vc.country = self.find_by_iso2(&vc.country_code).cloned();
            if vc.country.is_none() {
                tracing::debug!(code = %vc.country_code, "visited country not in catalog");
                missed += 1;
            }
        }
        missed
    }
}

/// Catalog loaded on first use, exactly once.
///
/// Concurrent first callers block on a single load; later callers get the
/// cached catalog. A failed load is not cached and is retried on the next
/// call.
#[derive(Debug)]
pub struct LazyCatalog {
    path: PathBuf,
    cell: OnceCell<CountryCatalog>,
}

impl LazyCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Result<&CountryCatalog> {
        self.cell
            .get_or_try_init(|| crate::loader::load_catalog(&self.path))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
