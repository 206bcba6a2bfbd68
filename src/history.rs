//! Past questions and what the ball said, newest first.
//!
//! The whole sequence lives in one [`KeyValueStore`] slot as a JSON array and
//! is rewritten in full on every [`HistoryStore::record`].

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

/// One submission. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
}

/// Which answers to show. Transient, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    #[default]
    All,
    Yes,
    No,
    Maybe,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Yes, Filter::No, Filter::Maybe];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Yes => "yes",
            Filter::No => "no",
            Filter::Maybe => "maybe",
        }
    }

    /// Parse user text, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        <Filter as ValueEnum>::from_str(input.trim(), true).ok()
    }

    pub fn matches(self, answer: &str) -> bool {
        match self {
            Filter::All => true,
            other => answer.eq_ignore_ascii_case(other.label()),
        }
    }
}

/// Owns the entry sequence and keeps its persisted copy in sync.
pub struct HistoryStore {
    store: Box<dyn KeyValueStore>,
    key: String,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Read the persisted history. Missing, unreadable or malformed data
    /// yields an empty history instead of an error.
    pub fn load(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        let entries = match store.get(key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<HistoryEntry>>(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, key, "discarding malformed history");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, key, "failed to read history");
                Vec::new()
            }
        };
        tracing::debug!(entries = entries.len(), key, "history loaded");

        Self {
            store,
            key: key.to_string(),
            entries,
        }
    }

    /// Prepend an entry and write the full sequence through to the store.
    ///
    /// The in-memory entry is kept even if the write fails.
    pub fn record(&mut self, question: &str, answer: &str) -> Result<()> {
        self.entries.insert(
            0,
            HistoryEntry {
                question: question.to_string(),
                answer: answer.to_string(),
            },
        );
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.store
            .set(&self.key, &json)
            .context("failed to persist history")
    }

    /// Entries matching `filter`, newest first. Clone the iterator to restart it.
    pub fn filtered(
        &self,
        filter: Filter,
    ) -> impl Iterator<Item = &HistoryEntry> + Clone + '_ {
        self.entries
            .iter()
            .filter(move |entry| filter.matches(&entry.answer))
    }

    pub fn count(&self, filter: Filter) -> usize {
        self.filtered(filter).count()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
