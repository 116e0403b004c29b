//! Reference data error types.

use std::path::PathBuf;

/// Errors that can occur while loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// Reading a reference file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No reference file of the expected kind was found
    #[error("no {what} found in {}", dir.display())]
    Missing { dir: PathBuf, what: &'static str },

    /// More than one candidate reference file was found
    #[error("{count} {what} files found in {}, expected exactly one", dir.display())]
    Duplicate {
        dir: PathBuf,
        what: &'static str,
        count: usize,
    },

    /// A fixed-width record could not be read
    #[error("{}:{line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The ticket type document is not valid XML of the expected shape
    #[error("XML parse error in {}: {message}", path.display())]
    Xml { path: PathBuf, message: String },
}
