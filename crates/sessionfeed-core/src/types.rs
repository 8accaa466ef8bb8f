use serde_json::{Map, Value};

/// Separator between the lines of a rendered session and between sessions.
pub const LINE_BREAK: &str = "\r\n";

/// Record type dropped before normalization.
pub const EXCLUDED_TYPE: &str = "Lab";

/// A raw session object as found in the feed, before validation.
pub type Record = Map<String, Value>;

/// A validated conference session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub number: i64,
    pub title: String,
    pub track: String,
    pub description: String,
}

impl Session {
    /// Render as four lines joined by `line_break`.
    pub fn render(&self, line_break: &str) -> String {
        let lines = [
            format!("{}:", self.number),
            format!("  :title: {}", self.title),
            format!("  :track: {}", self.track),
            format!("  :description: {}", self.description),
        ];
        lines.join(line_break)
    }
}

/// Why a record did not become a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("record type '{0}' is excluded")]
    ExcludedType(String),

    #[error("record has neither 'id' nor 'number'")]
    MissingNumber,

    #[error("field '{0}' is not a string")]
    NonStringField(&'static str),

    #[error("'{0}' is not an integer")]
    InvalidNumber(String),

    #[error("field '{0}' is missing")]
    MissingField(&'static str),
}

/// Knobs for record normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub excluded_type: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            excluded_type: EXCLUDED_TYPE.to_string(),
        }
    }
}
