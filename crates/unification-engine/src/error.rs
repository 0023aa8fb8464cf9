use std::path::PathBuf;
use thiserror::Error;

/// Errors from the I/O-facing edges of the engine.
///
/// Projection, renumbering, statistics and enhancement never fail; only
/// loading catalogues/config, persisting state and writing exports do.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read catalogue {path}: {source}")]
    CatalogueRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalogue: {0}")]
    CatalogueParse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("State store error: {0}")]
    Store(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::Export(e.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(e: toml::de::Error) -> Self {
        EngineError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
