//! Capped list of recent evaluations, persisted as JSON under the XDG state dir.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config;
use crate::evaluate::Evaluation;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("read history {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write history {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("history file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Recent results, newest first, never longer than `limit`.
#[derive(Debug)]
pub struct RecentHistory {
    path: PathBuf,
    limit: usize,
    entries: Vec<Evaluation>,
}

impl RecentHistory {
    /// Default path for the history file: `~/.local/state/subcheck/recent.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(config::state_dir()?.join("recent.json"))
    }

    /// Load history from `path`. A missing file is an empty history.
    pub fn load(path: impl Into<PathBuf>, limit: usize) -> Result<Self, HistoryError> {
        let path = path.into();
        let limit = limit.max(1);
        let mut entries: Vec<Evaluation> = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| HistoryError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(HistoryError::Read { path, source }),
        };
        entries.truncate(limit);
        Ok(Self {
            path,
            limit,
            entries,
        })
    }

    /// History at `path` without reading it, for overwriting a file that may be corrupt.
    pub fn empty(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit: limit.max(1),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add an evaluation at the front, drop the oldest past the limit, and save.
    pub fn push(&mut self, eval: Evaluation) -> Result<(), HistoryError> {
        self.entries.insert(0, eval);
        self.entries.truncate(self.limit);
        self.save()
    }

    pub fn list(&self) -> &[Evaluation] {
        &self.entries
    }

    /// Entry by 1-based position (1 = newest).
    pub fn get(&self, position: usize) -> Option<&Evaluation> {
        position.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The most recent evaluation.
    pub fn latest(&self) -> Option<&Evaluation> {
        self.entries.first()
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.save()
    }

    fn save(&self) -> Result<(), HistoryError> {
        let write_err = |source| HistoryError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        std::fs::write(&self.path, json).map_err(write_err)?;
        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "saved history");
        Ok(())
    }
}
