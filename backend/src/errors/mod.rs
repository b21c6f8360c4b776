use std::path::PathBuf;

use thiserror::Error;

/// Startup failures while building the dataset. Both are fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {source_name} data from {}", path.display())]
    SourceUnavailable {
        source_name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {source_name} data")]
    MalformedData {
        source_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn source_name(&self) -> &'static str {
        match self {
            LoadError::SourceUnavailable { source_name, .. } => source_name,
            LoadError::MalformedData { source_name, .. } => source_name,
        }
    }
}
