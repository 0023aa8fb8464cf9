//! Persisted "applicable standards" state
//!
//! The user's last framework selection and sector live behind an injected
//! store rather than a global, so callers choose memory-only or on-disk
//! persistence and tests stay isolated.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use shared_types::FrameworkSelection;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// What the store remembers between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableStandards {
    #[serde(default)]
    pub selection: FrameworkSelection,
    #[serde(default)]
    pub sector_id: Option<String>,
}

pub trait ApplicableStandardsStore {
    /// Prepare the backing storage; seeds `initial` only when nothing is stored yet
    fn init(&self, initial: &ApplicableStandards) -> Result<()>;

    /// Stored state, `None` when nothing was written
    fn read(&self) -> Result<Option<ApplicableStandards>>;

    fn write(&self, state: &ApplicableStandards) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<ApplicableStandards>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<ApplicableStandards>>> {
        self.state
            .lock()
            .map_err(|_| EngineError::Store("memory store lock poisoned".to_string()))
    }
}

impl ApplicableStandardsStore for MemoryStore {
    fn init(&self, initial: &ApplicableStandards) -> Result<()> {
        let mut state = self.lock()?;
        if state.is_none() {
            *state = Some(initial.clone());
        }
        Ok(())
    }

    fn read(&self) -> Result<Option<ApplicableStandards>> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, state: &ApplicableStandards) -> Result<()> {
        *self.lock()? = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ApplicableStandardsStore for JsonFileStore {
    fn init(&self, initial: &ApplicableStandards) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if !self.path.exists() {
            self.write(initial)?;
        }
        Ok(())
    }

    fn read(&self) -> Result<Option<ApplicableStandards>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&content).map_err(|e| {
            EngineError::Store(format!("corrupt state file {}: {}", self.path.display(), e))
        })?;
        Ok(Some(state))
    }

    fn write(&self, state: &ApplicableStandards) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| EngineError::Store(format!("failed to encode state: {}", e)))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
