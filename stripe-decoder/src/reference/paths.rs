//! Locating reference files.

use std::path::{Path, PathBuf};

use super::ReferenceError;

const CAPRI_EXTENSION: &str = "tty";
const NAMES_EXTENSION: &str = "xml";

/// Paths to the two reference files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    /// Fixed-width ticket type file
    pub capri: PathBuf,
    /// XML ticket type document
    pub names: PathBuf,
}

impl ReferencePaths {
    pub fn new(capri: impl Into<PathBuf>, names: impl Into<PathBuf>) -> Self {
        Self {
            capri: capri.into(),
            names: names.into(),
        }
    }

    /// Find the reference files in `dir`.
    ///
    /// The directory must hold exactly one `*.TTY` file and exactly one
    /// `*.xml` file; extensions match case-insensitively.
    pub fn discover(dir: &Path) -> Result<Self, ReferenceError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ReferenceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ReferenceError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }

        Ok(Self {
            capri: single(dir, &files, CAPRI_EXTENSION, "ticket type file (*.TTY)")?,
            names: single(dir, &files, NAMES_EXTENSION, "ticket type document (*.xml)")?,
        })
    }
}

/// The one file in `files` with `extension`.
fn single(
    dir: &Path,
    files: &[PathBuf],
    extension: &str,
    what: &'static str,
) -> Result<PathBuf, ReferenceError> {
    let mut matches: Vec<&PathBuf> = files
        .iter()
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        })
        .collect();

    match matches.len() {
        0 => Err(ReferenceError::Missing {
            dir: dir.to_path_buf(),
            what,
        }),
        1 => Ok(matches.remove(0).clone()),
        count => Err(ReferenceError::Duplicate {
            dir: dir.to_path_buf(),
            what,
            count,
        }),
    }
}
