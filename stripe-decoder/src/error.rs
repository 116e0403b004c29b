//! Top-level error type.

use crate::reference::ReferenceError;
use crate::stripe::StripeError;

/// Errors that end a decoding run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record could not be read or decoded
    #[error(transparent)]
    Stripe(#[from] StripeError),

    /// Reference data could not be loaded
    #[error("reference data: {0}")]
    Reference(#[from] ReferenceError),

    /// No records were supplied
    #[error("at least one {len}-digit record must be supplied", len = crate::stripe::HEX_LEN)]
    NoRecords,

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
