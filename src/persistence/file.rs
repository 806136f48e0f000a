//! Native file-backed store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BEST_SCORE_KEY, BestScoreStore, PersistError, format_best, parse_best};

/// Stores the best score in `<dir>/<key>`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under the default key inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(BEST_SCORE_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileStore {
    fn load(&self) -> Result<Option<u64>, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_best(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, best: u64) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Never truncate the existing value in place
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, format_best(best))?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Best score {} saved to {}", best, self.path.display());
        Ok(())
    }
}
