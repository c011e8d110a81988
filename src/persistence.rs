use crate::error::{DirectoryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Name of the state directory under the home directory.
const STATE_DIR: &str = ".lazydir";
const HISTORY_FILE: &str = "history.json";

/// Key-value persistence for the search history.
pub trait HistoryStore: Send {
    /// Returns the persisted history, most recent first.
    ///
    /// Absent or unreadable data yields an empty history.
    fn get(&self) -> Vec<String>;

    /// Replaces the persisted history.
    fn set(&mut self, terms: &[String]) -> Result<()>;
}

/// History stored as a JSON array of strings in a single file.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.lazydir/history.json`, if a home directory exists.
    pub fn in_state_dir() -> Option<Self> {
        state_dir().map(|dir| Self::new(dir.join(HISTORY_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the history file, reporting a file that exists but does not parse.
    pub fn read(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| DirectoryError::HistoryStoreCorrupt(format!("{:?}: {}", self.path, e)))?;

        serde_json::from_str::<Vec<String>>(&json)
            .map_err(|e| DirectoryError::HistoryStoreCorrupt(format!("{:?}: {}", self.path, e)))
    }
}

impl HistoryStore for FileHistoryStore {
    fn get(&self) -> Vec<String> {
        match self.read() {
            Ok(terms) => {
                info!("Loaded {} history entries from {:?}", terms.len(), self.path);
                terms
            }
            Err(e) => {
                // Corrupted history, start over
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    fn set(&mut self, terms: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .map_err(|e| DirectoryError::HistoryWrite(format!("{:?}: {}", parent, e)))?;
        }

        let json = serde_json::to_string_pretty(terms).map_err(|e| DirectoryError::HistoryWrite(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| DirectoryError::HistoryWrite(format!("{:?}: {}", self.path, e)))
    }
}

/// History kept in memory.
///
/// Clones share the same entries, so a handle kept outside a controller observes its writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    terms: Arc<Mutex<Vec<String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `terms`.
    pub fn with_terms<S: Into<String>>(terms: impl IntoIterator<Item = S>) -> Self {
        let store = Self::default();
        *store.lock_terms() = terms.into_iter().map(Into::into).collect();
        store
    }

    /// Returns a copy of the stored entries.
    pub fn snapshot(&self) -> Vec<String> {
        self.lock_terms().clone()
    }

    /// Number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_terms(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.terms.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn get(&self) -> Vec<String> {
        self.snapshot()
    }

    fn set(&mut self, terms: &[String]) -> Result<()> {
        *self.lock_terms() = terms.to_vec();
        *self.writes.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
        Ok(())
    }
}

/// Returns the `~/.lazydir` directory.
pub fn state_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STATE_DIR))
}
