//! Ticket type code.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid ticket type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ticket type code: {reason}")]
pub struct InvalidTicketType {
    reason: &'static str,
}

/// A valid 3-character ticket type code (e.g. `SOR`, `CDR`, `7DS`).
///
/// Codes are 3 uppercase ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use stripe_decoder::domain::TicketTypeCode;
///
/// let sor = TicketTypeCode::parse("SOR").unwrap();
/// assert_eq!(sor.as_str(), "SOR");
///
/// assert!(TicketTypeCode::parse("sor").is_err());
/// assert!(TicketTypeCode::parse("SO").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketTypeCode([u8; 3]);

impl TicketTypeCode {
    /// Parse a ticket type code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTicketType> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidTicketType {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidTicketType {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(TicketTypeCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for TicketTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicketTypeCode({})", self.as_str())
    }
}

impl fmt::Display for TicketTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TicketTypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
