use std::fmt;
use std::path::PathBuf;

/// Result type for clipstash-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the history-store boundary
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// A history or pinned document failed to parse
    Json(serde_json::Error),

    /// The platform denied access to the history store
    AccessDenied(PathBuf),

    /// History capture is not enabled (no history document exists)
    HistoryDisabled(PathBuf),

    /// The history store exists but holds no items
    EmptyHistory,

    /// The pinned-items directory does not exist
    PinnedDirMissing(PathBuf),

    /// The pinned metadata document is missing from its directory
    PinnedMetadataMissing(PathBuf),

    /// The pinned metadata document carries no item entries
    PinnedEmpty,

    /// The data directory could not be resolved
    DataDir(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "document error: {}", err),
            Error::AccessDenied(path) => {
                write!(f, "access to clipboard history denied: {}", path.display())
            }
            Error::HistoryDisabled(path) => write!(
                f,
                "clipboard history is not enabled (no history at {})",
                path.display()
            ),
            Error::EmptyHistory => write!(f, "clipboard history is empty"),
            Error::PinnedDirMissing(path) => {
                write!(f, "no pinned items directory at {}", path.display())
            }
            Error::PinnedMetadataMissing(path) => {
                write!(f, "no pinned metadata document at {}", path.display())
            }
            Error::PinnedEmpty => write!(f, "the pinned metadata lists no items"),
            Error::DataDir(msg) => write!(f, "could not resolve data directory: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
