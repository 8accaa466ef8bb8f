use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FeedError;
use crate::types::Record;

/// Top-level document shape: `{ "response": { "sessions": [ ... ] } }`.
#[derive(Debug, Deserialize)]
struct Document {
    response: Response,
}

#[derive(Debug, Deserialize)]
struct Response {
    sessions: Vec<Record>,
}

/// The raw records of one feed file, in document order.
#[derive(Debug, Clone)]
pub struct SessionFeed {
    path: PathBuf,
    records: Vec<Record>,
}

impl SessionFeed {
    /// Read and decode a feed file in one pass.
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let bytes = std::fs::read(path).map_err(|source| FeedError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        let feed = Self::from_slice(&bytes, path)?;
        tracing::info!(path = %path.display(), records = feed.records.len(), "Loaded session feed");
        Ok(feed)
    }

    /// Decode feed bytes. `path` is only used for error reporting.
    pub fn from_slice(bytes: &[u8], path: &Path) -> Result<Self, FeedError> {
        let document: Document =
            serde_json::from_slice(bytes).map_err(|source| FeedError::MalformedDocument {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            records: document.response.sessions,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct string `type` values across every record, excluded ones included.
    pub fn types(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter_map(|record| record.get("type").and_then(|v| v.as_str()))
            .map(String::from)
            .collect()
    }
}
