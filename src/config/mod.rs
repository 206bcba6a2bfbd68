//! Runtime settings: where to ask and where to remember.

use anyhow::{Context, Result};
use std::path::Path;

use crate::consts::{DEFAULT_API_URL, HISTORY_KEY, default_db_path};
use crate::history::HistoryStore;
use crate::store::memory::MemoryStore;
use crate::store::sqlite::SqliteStore;

/// Resolved settings. CLI flags override the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    /// SQLite path, or `":memory:"` for an ephemeral session.
    pub db_path: String,
    pub history_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            db_path: default_db_path().to_string_lossy().into_owned(),
            history_key: HISTORY_KEY.to_string(),
        }
    }
}

impl Settings {
    pub fn new(api_url: Option<String>, db_path: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url.unwrap_or(defaults.api_url),
            db_path: db_path.unwrap_or(defaults.db_path),
            history_key: defaults.history_key,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        self.db_path == ":memory:"
    }

    /// Open the configured store and load the history from it.
    ///
    /// A database that can't be opened is not fatal: the session falls back
    /// to an in-memory store and nothing is persisted.
    pub fn open_history(&self) -> HistoryStore {
        let store = match self.open_store() {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.db_path, "history will not be saved");
                return HistoryStore::load(Box::new(MemoryStore::new()), &self.history_key);
            }
        };
        HistoryStore::load(Box::new(store), &self.history_key)
    }

    /// Creates the database's parent directory if needed.
    fn open_store(&self) -> Result<SqliteStore> {
        if !self.is_ephemeral()
            && let Some(parent) = Path::new(&self.db_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        SqliteStore::open(&self.db_path)
    }
}
