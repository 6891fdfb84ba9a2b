//! JSON persistence of the last selections.

use crate::errors::{AppError, AppResult};
use crate::models::InputValues;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved selections, failing on a missing or malformed file.
    pub fn try_load(&self) -> AppResult<InputValues> {
        let json = fs::read_to_string(&self.path)
            .map_err(|e| AppError::PersistenceRead(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&json)
            .map_err(|e| AppError::PersistenceRead(format!("{}: {e}", self.path.display())))
    }

    /// Saved selections, or defaults when nothing usable is stored.
    pub fn load(&self) -> InputValues {
        if !self.path.exists() {
            log::debug!("no saved selections at {}", self.path.display());
            return InputValues::default();
        }

        match self.try_load() {
            Ok(values) => {
                log::debug!("loaded selections from {}", self.path.display());
                values
            }
            Err(e) => {
                log::warn!("{e}; falling back to defaults");
                InputValues::default()
            }
        }
    }

    /// Overwrite the state file with `values`.
    pub fn save(&self, values: &InputValues) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, json)?;
        log::debug!("saved selections to {}", self.path.display());
        Ok(())
    }
}
