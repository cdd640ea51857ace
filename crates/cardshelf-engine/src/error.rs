use std::fmt;

/// Result type for cardshelf-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No header row: the input had no rows, or the first non-blank row had no cells
    MissingHeader,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingHeader => write!(
                f,
                "Missing header row: the catalog is empty or its first row has no columns"
            ),
        }
    }
}

impl std::error::Error for Error {}
