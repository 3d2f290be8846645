use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the catalog providers and pinned-list persistence.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The pinned file exists but is not valid TOML.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The pinned list could not be serialized.
    #[error("failed to serialize pinned directories: {0}")]
    Serialize(#[from] toml::ser::Error),
}
