//! Error types for jsonpool.

use std::fmt;

/// The main error type for jsonpool operations.
#[derive(Debug)]
pub enum Error {
    /// A lock was poisoned (internal error)
    LockPoisoned,

    /// I/O error
    Io(std::io::Error),

    /// The backing file exists but does not hold a valid JSON document
    Corrupt(String),

    /// Serialization/deserialization error
    Serialization(String),

    /// A mutation was rejected because the store is locked
    Locked,

    /// Invalid operation
    InvalidOperation(String),
}

impl Error {
    /// Whether the store can keep operating after this error.
    ///
    /// A corrupt backing file is fatal: the store must not run over an
    /// unknown document state. Everything else is recoverable or a
    /// rejected no-op.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Corrupt(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LockPoisoned => write!(f, "Lock poisoned"),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Corrupt(msg) => write!(f, "Corrupt database file: {}", msg),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::Locked => write!(f, "Store is locked"),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// A specialized `Result` type for jsonpool operations.
pub type Result<T> = std::result::Result<T, Error>;
