//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Faults caused by bad user input. Reported as a single line on stderr,
/// never a backtrace.
#[derive(Debug)]
pub enum UsageError {
    /// Delimiter argument did not resolve to a single byte.
    BadDelimiter(String),
    /// Dialect name absent from the registry.
    UnknownDialect(String),
    /// Input path could not be opened for reading.
    InputOpen { path: String, source: io::Error },
    /// Output path could not be created for writing.
    OutputOpen { path: String, source: io::Error },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::BadDelimiter(got) => write!(
                f,
                "delimiter must be a 1-character string, or one of: \\t, \\0 (got '{got}')"
            ),
            UsageError::UnknownDialect(name) => write!(f, "no such dialect: {name}"),
            UsageError::InputOpen { path, source } => {
                write!(f, "cannot open '{path}': {source}")
            }
            UsageError::OutputOpen { path, source } => {
                write!(f, "cannot create '{path}': {source}")
            }
        }
    }
}
impl Error for UsageError {}

/// Top-level error type bubbled up to `main`.
#[derive(Debug)]
pub enum CountError {
    Usage(UsageError),
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::Usage(e) => write!(f, "{e}"),
            CountError::Io(e) => write!(f, "{e}"),
            CountError::Csv(e) => write!(f, "{e}"),
        }
    }
}
impl Error for CountError {}

// automatic conversions
impl From<UsageError> for CountError {
    fn from(e: UsageError) -> Self {
        Self::Usage(e)
    }
}
impl From<io::Error> for CountError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<csv::Error> for CountError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
