use std::path::PathBuf;

use thiserror::Error;

/// Failures of the surfaces around the structuring core: reading input,
/// decoding payloads and loading settings. The core itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON payload (line {line}): {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("article title must not be empty")]
    EmptyTitle,
}

pub type Result<T> = std::result::Result<T, Error>;
