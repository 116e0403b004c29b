//! Domain error types.
//!
//! These errors represent raw field values that cannot be converted into
//! domain values. They are distinct from layout and input errors.

/// Domain-level errors for converting raw field values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Index does not select a symbol of the alphabet
    #[error("index {index} is outside the {alphabet} alphabet ({len} symbols)")]
    AlphabetRange {
        alphabet: &'static str,
        index: u64,
        len: usize,
    },

    /// Raw value is wider than the field it was read from
    #[error("{field} value {value} exceeds maximum {max}")]
    FieldValue {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::AlphabetRange {
            alphabet: "letter",
            index: 27,
            len: 26,
        };
        assert_eq!(
            err.to_string(),
            "index 27 is outside the letter alphabet (26 symbols)"
        );

        let err = DomainError::FieldValue {
            field: "validity days",
            value: 600,
            max: 511,
        };
        assert_eq!(err.to_string(), "validity days value 600 exceeds maximum 511");
    }
}
