//! LocalStorage-backed store (WASM only)

use web_sys::Storage;

use super::{BEST_SCORE_KEY, BestScoreStore, PersistError, format_best, parse_best};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistError::Unavailable)
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<u64>, PersistError> {
        let storage = Self::storage()?;
        match storage.get_item(BEST_SCORE_KEY) {
            Ok(Some(raw)) => parse_best(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(_) => Err(PersistError::Unavailable),
        }
    }

    fn save(&mut self, best: u64) -> Result<(), PersistError> {
        let storage = Self::storage()?;
        storage
            .set_item(BEST_SCORE_KEY, &format_best(best))
            .map_err(|e| PersistError::Rejected(format!("{:?}", e)))?;
        log::info!("Best score {} saved", best);
        Ok(())
    }
}
