// crates/travellog-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading reference data, validating records or
/// talking to a preference store.
///
/// Filtering, sorting and border expansion never fail; malformed input there
/// degrades to a documented fallback instead.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache codec error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid flight duration: {0}")]
    InvalidDuration(String),

    #[error("invalid visited place: {0}")]
    InvalidPlace(String),

    #[error("preference store error: {0}")]
    Preference(String),
}

pub type Result<T> = std::result::Result<T, TravelError>;
