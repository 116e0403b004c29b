//! LTOT (ticket class) code type.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{DomainError, LETTERS};

/// Width in bits of each letter index within a raw LTOT field.
const HALF_WIDTH: u32 = 5;
const HALF_MASK: u64 = (1 << HALF_WIDTH) - 1;

/// Error returned when parsing an invalid LTOT code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid LTOT code: {reason}")]
pub struct InvalidLtot {
    reason: &'static str,
}

/// A two-letter LTOT code identifying a ticket-type class.
///
/// On the stripe an LTOT is a 10-bit value whose high and low 5-bit halves
/// each index the letters `A-Z`. Reference data keys ticket types by the
/// same two letters.
///
/// # Examples
///
/// ```
/// use stripe_decoder::domain::Ltot;
///
/// let ltot = Ltot::from_raw(4).unwrap();
/// assert_eq!(ltot.as_str(), "AE");
/// assert_eq!(Ltot::parse("AE").unwrap(), ltot);
///
/// // Halves past 'Z' are rejected
/// assert!(Ltot::from_raw(26).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ltot([u8; 2]);

impl Ltot {
    /// Decode an LTOT from its raw 10-bit stripe value, high half first.
    pub fn from_raw(raw: u64) -> Result<Self, DomainError> {
        if raw >> (2 * HALF_WIDTH) != 0 {
            return Err(DomainError::FieldValue {
                field: "LTOT",
                value: raw,
                max: (1 << (2 * HALF_WIDTH)) - 1,
            });
        }

        let high = LETTERS.symbol(raw >> HALF_WIDTH)?;
        let low = LETTERS.symbol(raw & HALF_MASK)?;

        Ok(Ltot([high as u8, low as u8]))
    }

    /// Parse an LTOT from a string of exactly 2 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidLtot> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidLtot {
                reason: "must be exactly 2 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidLtot {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(Ltot([bytes[0], bytes[1]]))
    }

    /// Returns the raw 10-bit value this code is recorded as.
    pub fn to_raw(&self) -> u64 {
        let high = (self.0[0] - b'A') as u64;
        let low = (self.0[1] - b'A') as u64;
        (high << HALF_WIDTH) | low
    }

    /// Returns the LTOT code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Ltot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ltot({})", self.as_str())
    }
}

impl fmt::Display for Ltot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Ltot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
