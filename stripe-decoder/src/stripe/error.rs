//! Stripe decoding error types.

use crate::domain::DomainError;

/// Errors raised while reading or decoding a stripe record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StripeError {
    /// Input could not be turned into a 19-byte record
    #[error("invalid record: {reason}")]
    InputFormat { reason: String },

    /// A field's bit range falls outside the record
    #[error(
        "field {field} (start {start}, width {width}) lies outside the {len}-bit record"
    )]
    FieldRange {
        field: &'static str,
        start: u32,
        width: u32,
        len: usize,
    },

    /// A raw field value has no domain meaning
    #[error(transparent)]
    Domain(#[from] DomainError),
}
