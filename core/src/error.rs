use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an index build. Rejected tokens and unknown query
/// keywords are not errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A named document could not be read
    #[error("document not found or unreadable: {document}")]
    DocumentUnavailable {
        document: String,
        #[source]
        source: std::io::Error,
    },

    /// The file listing document names could not be read
    #[error("document list unavailable: {}", path.display())]
    DocumentListUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stop-word file could not be read
    #[error("stop-word list unavailable: {}", path.display())]
    StopWordsUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
