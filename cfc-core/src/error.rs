//! Error types for the few fallible edges of the core.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field name that does not match any activity quantity.
    UnknownField(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownField(name) => write!(f, "Unknown activity field: {}", name),
        }
    }
}

impl std::error::Error for Error {}
