use std::fmt;

/// Result type for folio-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
///
/// Missing collection metadata is deliberately not an error: primary-key
/// dependent operations degrade instead (empty default sort, no item links,
/// empty select-all).
#[derive(Debug)]
pub enum Error {
    /// Query collaborator failure, surfaced verbatim on the result state
    Fetch(String),

    /// Preset persistence failed
    Preset(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            Error::Preset(msg) => write!(f, "Preset error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Fetch(_) | Error::Preset(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Preset(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Preset(err.to_string())
    }
}
