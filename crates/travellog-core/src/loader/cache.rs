// crates/travellog-core/src/loader/cache.rs
//! Binary caches for parsed reference data.
use super::common_io::newest_mtime;
use crate::error::{Result, TravelError};
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Upper bound on a cache payload, so a corrupt file cannot make us
/// allocate without limit.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

/// A cache is fresh when it exists and nothing in `source` is newer.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match newest_mtime(source) {
        Some(src_time) => src_time <= cache_time,
        None => false,
    }
}

/// Writes any serializable value with bincode, gzip-wrapped under `compact`.
pub fn write_cache<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    let mut encoder: Box<dyn Write> = Box::new(GzEncoder::new(writer, Compression::default()));
    #[cfg(not(feature = "compact"))]
    let mut encoder: Box<dyn Write> = Box::new(writer);

    bincode::serialize_into(&mut encoder, value)?;
    encoder.flush()?;
    Ok(())
}

pub fn read_cache<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| TravelError::NotFound(format!("cache {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    let mut stream: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let mut stream: Box<dyn Read> = Box::new(reader);

    let mut data = Vec::new();
    stream.read_to_end(&mut data)?;
    // Same encoding as `bincode::serialize_into` (fixint, little endian).
    let value = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(CACHE_LIMIT)
        .allow_trailing_bytes()
        .deserialize(&data)?;
    Ok(value)
}
