//! Decoder configuration.

use std::path::PathBuf;

use crate::reference::{ReferenceError, ReferenceIndex, ReferencePaths};
use crate::report::OutputFormat;

/// Where ticket type reference data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReferenceSource {
    /// Decode without ticket type resolution
    #[default]
    None,
    /// Discover both reference files in a directory
    Directory(PathBuf),
    /// Explicit reference file paths
    Files(ReferencePaths),
}

impl ReferenceSource {
    /// Build the reference index this source describes.
    pub fn load(&self) -> Result<ReferenceIndex, ReferenceError> {
        match self {
            ReferenceSource::None => Ok(ReferenceIndex::empty()),
            ReferenceSource::Directory(dir) => {
                ReferenceIndex::load(&ReferencePaths::discover(dir)?)
            }
            ReferenceSource::Files(paths) => ReferenceIndex::load(paths),
        }
    }
}

/// Configuration for a decoding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Reference data used to resolve ticket types.
    pub reference: ReferenceSource,

    /// Output format for decoded records.
    pub format: OutputFormat,
}

impl DecoderConfig {
    pub fn new(reference: ReferenceSource, format: OutputFormat) -> Self {
        Self { reference, format }
    }

    /// Set the reference data source.
    pub fn with_reference(mut self, reference: ReferenceSource) -> Self {
        self.reference = reference;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
