// crates/travellog-core/src/geometry.rs
//! Country border expansion for the map view.
//!
//! Border documents are GeoJSON-style MultiPolygons:
//! `coordinates[group][ring][point] = [lon, lat]`. The map wants a flat list
//! of rings with points in `(lat, lon)` order, one overlay polygon per ring.
use crate::model::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One closed polygon outline, points in map (lat, lng) order.
pub type Ring = Vec<LatLng>;

/// Stored border document for one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderGeometry {
    #[serde(default)]
    pub coordinates: Vec<Vec<Vec<Vec<f64>>>>,
}

impl BorderGeometry {
    /// Flattens polygon groups into rings, swapping `[lon, lat]` to
    /// `(lat, lng)`. Points with fewer than two numbers are skipped; extra
    /// numbers (altitude) are ignored.
    pub fn rings(&self) -> Vec<Ring> {
        self.coordinates
            .iter()
            .flatten()
            .map(|ring| {
                ring.iter()
                    .filter_map(|p| match p.as_slice() {
                        [lon, lat, ..] => Some(LatLng::new(*lat, *lon)),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    pub fn ring_count(&self) -> usize {
        self.coordinates.iter().map(Vec::len).sum()
    }
}

/// Where border documents come from, keyed by ISO-2 code.
pub trait BorderSource {
    fn border(&self, iso2: &str) -> Option<&BorderGeometry>;
}

/// In-memory border documents. Codes are stored upper-case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BorderIndex {
    pub(crate) borders: HashMap<String, BorderGeometry>,
}

impl BorderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, iso2: &str, geometry: BorderGeometry) {
        self.borders.insert(iso2.to_ascii_uppercase(), geometry);
    }

    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }
}

impl FromIterator<(String, BorderGeometry)> for BorderIndex {
    fn from_iter<I: IntoIterator<Item = (String, BorderGeometry)>>(iter: I) -> Self {
        let mut idx = BorderIndex::new();
        for (code, geom) in iter {
            idx.insert(&code, geom);
        }
        idx
    }
}

impl BorderSource for BorderIndex {
    fn border(&self, iso2: &str) -> Option<&BorderGeometry> {
        self.borders.get(&iso2.to_ascii_uppercase())
    }
}

/// Expands border documents into map rings.
///
/// Unknown codes produce no rings. Batches are concatenated in input order
/// with no dedup or merging; the map draws each ring on its own.
pub struct BorderGeometryBuilder<'a, S: BorderSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: BorderSource + ?Sized> BorderGeometryBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub fn build(&self, iso2: &str) -> Vec<Ring> {
        match self.source.border(iso2) {
            Some(geom) => geom.rings(),
            None => {
                tracing::debug!(iso2, "no border geometry for country");
                Vec::new()
            }
        }
    }

    pub fn build_batch<I, T>(&self, codes: I) -> Vec<Ring>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        codes
            .into_iter()
            .flat_map(|code| self.build(code.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> BorderGeometry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn swaps_to_lat_lng() {
        let g = doc(r#"{"type":"MultiPolygon","coordinates":[[[[16.0,48.0],[17.0,48.0]]]]}"#);
        let rings = g.rings();
        assert_eq!(rings, vec![vec![LatLng::new(48.0, 16.0), LatLng::new(48.0, 17.0)]]);
    }

    #[test]
    fn flattens_groups_and_holes() {
        let g = doc(
            r#"{"coordinates":[
                [[[0,0],[1,0],[0,1],[0,0]], [[0.2,0.2],[0.3,0.2],[0.2,0.3],[0.2,0.2]]],
                [[[5,5],[6,5],[5,6],[5,5]]]
            ]}"#,
        );
        assert_eq!(g.ring_count(), 3);
        let rings = g.rings();
        assert_eq!(rings.len(), 3);
        assert_eq!(rings[2][0], LatLng::new(5.0, 5.0));
    }

    #[test]
    fn short_points_are_skipped() {
        let g = doc(r#"{"coordinates":[[[[1.0],[2.0,3.0,100.0]]]]}"#);
        assert_eq!(g.rings(), vec![vec![LatLng::new(3.0, 2.0)]]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut idx = BorderIndex::new();
        idx.insert("sk", doc(r#"{"coordinates":[[[[17.0,48.0]]]]}"#));
        assert!(idx.border("SK").is_some());
        assert!(idx.border("Sk").is_some());
        assert!(idx.border("CZ").is_none());
    }
}
