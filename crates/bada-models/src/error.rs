use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or querying coefficient tables.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no coefficient table for aircraft `{aircraft}` at {}", location.display())]
    AircraftNotFound { aircraft: String, location: PathBuf },
    #[error("aircraft `{aircraft}` has no entry at `{path}`")]
    PathNotFound { aircraft: String, path: String },
    #[error("value at `{path}` is not a number: {text:?}")]
    MalformedValue { path: String, text: String },
    #[error("value at `{path}` is not a {expected}")]
    UnexpectedKind { path: String, expected: &'static str },
    #[error("coefficient table for `{aircraft}` is not well-formed XML: {source}")]
    Xml {
        aircraft: String,
        #[source]
        source: roxmltree::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
