//! Best-score persistence
//!
//! A single integer stored as plain decimal text under [`BEST_SCORE_KEY`].
//! Read once at startup, written whenever a run sets a new best. Write
//! failures are never fatal to the simulation.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

use thiserror::Error;

/// Storage key (LocalStorage key on web, file name on native)
pub const BEST_SCORE_KEY: &str = "endless_dash_best";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed best score {0:?}")]
    Malformed(String),
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Where the best score lives between sessions
pub trait BestScoreStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<u64>, PersistError>;
    fn save(&mut self, best: u64) -> Result<(), PersistError>;
}

/// Parse a stored value
pub fn parse_best(raw: &str) -> Result<u64, PersistError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| PersistError::Malformed(raw.to_string()))
}

/// Format a value for storage
pub fn format_best(best: u64) -> String {
    best.to_string()
}

/// In-memory store; can be told to fail writes
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
    fail_writes: bool,
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with a raw value
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: Some(raw.into()),
            ..Self::default()
        }
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, PersistError> {
        self.value.as_deref().map(parse_best).transpose()
    }

    fn save(&mut self, best: u64) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::Unavailable);
        }
        self.value = Some(format_best(best));
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_best("42").unwrap(), 42);
        assert_eq!(parse_best(" 17\n").unwrap(), 17);
        assert!(matches!(parse_best("abc"), Err(PersistError::Malformed(_))));
        assert!(matches!(parse_best("-3"), Err(PersistError::Malformed(_))));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(31).unwrap();
        assert_eq!(store.raw(), Some("31"));
        assert_eq!(store.load().unwrap(), Some(31));
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let mut store = MemoryStore::with_raw("5");
        store.set_fail_writes(true);
        assert!(store.save(9).is_err());
        assert_eq!(store.load().unwrap(), Some(5));
        assert_eq!(store.writes, 0);
    }
}
