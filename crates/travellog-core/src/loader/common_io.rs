// crates/travellog-core/src/loader/common_io.rs
use crate::error::{Result, TravelError};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(TravelError::InvalidData(format!(
            "{} is gzip compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// File name without `.json` / `.json.gz`, e.g. `SK.json.gz` -> `SK`.
pub fn json_stem(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.strip_suffix(".json.gz")
        .or_else(|| name.strip_suffix(".json"))
}

/// Newest modification time of `path`, descending one level into
/// directories.
pub fn newest_mtime(path: &Path) -> Option<SystemTime> {
    let meta = fs::metadata(path).ok()?;
    let mut newest = meta.modified().ok()?;
    if meta.is_dir() {
        for entry in fs::read_dir(path).ok()?.flatten() {
            if let Ok(t) = entry.metadata().and_then(|m| m.modified()) {
                newest = newest.max(t);
            }
        }
    }
    Some(newest)
}

pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems() {
        assert_eq!(json_stem(Path::new("b/SK.json")), Some("SK"));
        assert_eq!(json_stem(Path::new("b/SK.json.gz")), Some("SK"));
        assert_eq!(json_stem(Path::new("b/README.md")), None);
    }

    #[test]
    fn cache_path_sits_next_to_source() {
        assert_eq!(
            get_cache_path(Path::new("/data/borders"), ".borders.bin"),
            PathBuf::from("/data/borders.borders.bin")
        );
    }
}
