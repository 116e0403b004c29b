//! Raw stripe records.

use std::fmt;

use serde::{Serialize, Serializer};

use super::StripeError;

/// Number of bytes in a stripe record.
pub const RECORD_LEN: usize = 19;

/// Number of bits in a stripe record.
pub const RECORD_BITS: usize = RECORD_LEN * 8;

/// Number of hex digits that encode a stripe record.
pub const HEX_LEN: usize = RECORD_LEN * 2;

/// The 19 bytes read from a ticket stripe, in recording order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawRecord([u8; RECORD_LEN]);

impl RawRecord {
    /// Wrap a byte slice, which must be exactly 19 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StripeError> {
        let bytes: [u8; RECORD_LEN] =
            bytes.try_into().map_err(|_| StripeError::InputFormat {
                reason: format!(
                    "record must be exactly {RECORD_LEN} bytes, got {}",
                    bytes.len()
                ),
            })?;

        Ok(RawRecord(bytes))
    }

    /// Parse a record from exactly 38 hex digits (either case).
    pub fn from_hex(s: &str) -> Result<Self, StripeError> {
        let chars = s.chars().count();
        if chars != HEX_LEN || s.len() != HEX_LEN {
            return Err(StripeError::InputFormat {
                reason: format!(
                    "record must be {HEX_LEN} hex digits, got {chars} characters"
                ),
            });
        }

        let mut bytes = [0u8; RECORD_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| StripeError::InputFormat {
            reason: format!("record is not valid hex: {e}"),
        })?;

        Ok(RawRecord(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }
}

impl fmt::Debug for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawRecord({self})")
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl Serialize for RawRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse every argument into a record before any of them is decoded.
///
/// One malformed argument fails the whole batch; the error names its
/// 1-based position.
pub fn parse_records<I, S>(args: I) -> Result<Vec<RawRecord>, StripeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            RawRecord::from_hex(arg.as_ref()).map_err(|e| match e {
                StripeError::InputFormat { reason } => StripeError::InputFormat {
                    reason: format!("argument {}: {reason}", i + 1),
                },
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN: &str = "41AA1120D7004198C80008000180044026AB20";

    #[test]
    fn from_hex_valid() {
        let record = RawRecord::from_hex(GOLDEN).unwrap();
        assert_eq!(record.as_bytes()[0], 0x41);
        assert_eq!(record.as_bytes()[18], 0x20);
    }

    #[test]
    fn from_hex_accepts_lowercase() {
        let lower = GOLDEN.to_lowercase();
        assert_eq!(
            RawRecord::from_hex(&lower).unwrap(),
            RawRecord::from_hex(GOLDEN).unwrap()
        );
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            RawRecord::from_hex(&GOLDEN[..37]),
            Err(StripeError::InputFormat { .. })
        ));
        let long = format!("{GOLDEN}0");
        assert!(matches!(
            RawRecord::from_hex(&long),
            Err(StripeError::InputFormat { .. })
        ));
        assert!(RawRecord::from_hex("").is_err());
        // 19 characters is half a record
        assert!(RawRecord::from_hex(&GOLDEN[..19]).is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let bad = format!("{}G", &GOLDEN[..37]);
        let err = RawRecord::from_hex(&bad).unwrap_err();
        assert!(err.to_string().contains("not valid hex"));
    }

    #[test]
    fn length_error_counts_characters() {
        // 37 hex digits plus one two-byte character is 38 characters
        let accented = format!("{}é", &GOLDEN[..37]);
        let err = RawRecord::from_hex(&accented).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid record: record must be 38 hex digits, got 38 characters"
        );

        let err = RawRecord::from_hex("é").unwrap_err();
        assert!(err.to_string().ends_with("got 1 characters"));
    }

    #[test]
    fn from_bytes_checks_length() {
        assert!(RawRecord::from_bytes(&[0u8; 19]).is_ok());
        let err = RawRecord::from_bytes(&[0u8; 18]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid record: record must be exactly 19 bytes, got 18"
        );
        assert!(RawRecord::from_bytes(&[0u8; 20]).is_err());
    }

    #[test]
    fn display_is_uppercase_hex() {
        let record = RawRecord::from_hex(&GOLDEN.to_lowercase()).unwrap();
        assert_eq!(record.to_string(), GOLDEN);
        assert_eq!(format!("{:?}", record), format!("RawRecord({GOLDEN})"));
    }

    #[test]
    fn parse_records_all_valid() {
        let records = parse_records([GOLDEN, GOLDEN]).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn parse_records_fails_fast() {
        let short = &GOLDEN[..37];
        let err = parse_records([GOLDEN, short, GOLDEN]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid record: argument 2: record must be 38 hex digits, got 37 characters"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 38 hex digits parse, and display back in upper case
        #[test]
        fn hex_roundtrip(s in "[0-9A-Fa-f]{38}") {
            let record = RawRecord::from_hex(&s).unwrap();
            prop_assert_eq!(record.to_string(), s.to_uppercase());
        }

        /// Any other length is rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9A-F]{0,37}|[0-9A-F]{39,60}") {
            prop_assert!(RawRecord::from_hex(&s).is_err());
        }
    }
}
