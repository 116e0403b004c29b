//! Location code type.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{DomainError, LOCATION_PREFIXES};

/// Largest numeric suffix a 10-bit field can carry.
const MAX_SUFFIX: u16 = 1023;

/// A location code as recorded on a stripe: a prefix symbol plus a numeric suffix.
///
/// The prefix is drawn from the 32-symbol alphabet `0-9A-V` and the suffix
/// is a number in `0..=1023`, used as-is.
///
/// # Examples
///
/// ```
/// use stripe_decoder::domain::LocationCode;
///
/// let nlc = LocationCode::from_raw(16, 298).unwrap();
/// assert_eq!(nlc.to_string(), "G298");
///
/// // Prefix indices past the alphabet are rejected
/// assert!(LocationCode::from_raw(32, 0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationCode {
    prefix: char,
    suffix: u16,
}

impl LocationCode {
    /// Build a location code from raw prefix and suffix field values.
    pub fn from_raw(prefix: u64, suffix: u64) -> Result<Self, DomainError> {
        let prefix = LOCATION_PREFIXES.symbol(prefix)?;
        let suffix = u16::try_from(suffix)
            .ok()
            .filter(|&s| s <= MAX_SUFFIX)
            .ok_or(DomainError::FieldValue {
                field: "location suffix",
                value: suffix,
                max: MAX_SUFFIX as u64,
            })?;

        Ok(LocationCode { prefix, suffix })
    }

    /// Returns the prefix symbol.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Returns the numeric suffix.
    pub fn suffix(&self) -> u16 {
        self.suffix
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({self})")
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.suffix)
    }
}

impl Serialize for LocationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
