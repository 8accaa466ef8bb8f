//! Optional TOML configuration for sessionfeed.
//!
//! ```toml
//! line_break = "\r\n"
//! excluded_type = "Lab"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::FeedError;
use crate::types::{NormalizeOptions, EXCLUDED_TYPE, LINE_BREAK};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct FeedConfig {
    /// Separator used by the `sessions` listing
    pub line_break: String,
    /// Record type dropped before normalization
    pub excluded_type: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            line_break: LINE_BREAK.to_string(),
            excluded_type: EXCLUDED_TYPE.to_string(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from an explicit path. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let content = std::fs::read_to_string(path).map_err(|e| FeedError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content).map_err(|message| FeedError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            excluded_type: self.excluded_type.clone(),
        }
    }
}
