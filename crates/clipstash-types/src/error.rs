use std::fmt;

/// Result type for clipstash-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Text is not a well-formed item id
    IdParse(String),
    /// Text is neither an ordinal index nor an item id
    LocatorParse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IdParse(input) => write!(f, "'{}' is not a valid item id", input),
            Error::LocatorParse(input) => {
                write!(f, "'{}' is neither an item index nor an item id", input)
            }
        }
    }
}

impl std::error::Error for Error {}
