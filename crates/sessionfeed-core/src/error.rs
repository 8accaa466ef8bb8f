use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Couldn't open '{}'", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't parse JSON in '{}'", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Couldn't load config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
}
