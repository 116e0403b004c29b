//! Field extraction and conversion into a decoded ticket.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use super::layout::{
    DATE_MODE, DESTINATION_PREFIX, DESTINATION_SUFFIX, END_OF_VALIDITY, LTOT, ORIGIN_PREFIX,
    ORIGIN_SUFFIX, OWNERSHIP, ROUTE, STATUS, TICKET_CLASS,
};
use super::{BitSequence, FieldSpec, RawRecord, StripeError};
use crate::domain::{LocationCode, Ltot, expiry_date};

/// Reads the raw value of `field` from `seq`, first bit most significant.
pub fn decode(seq: &BitSequence, field: &FieldSpec) -> Result<u64, StripeError> {
    let range = field.physical_range(seq.len())?;
    seq.read(range.start, range.len())
        .ok_or(StripeError::FieldRange {
            field: field.name,
            start: field.start,
            width: field.width,
            len: seq.len(),
        })
}

/// The fields of one stripe record, converted to domain values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedTicket {
    pub origin: LocationCode,
    pub destination: LocationCode,
    pub route: u64,
    pub ltot: Ltot,
    pub status: u64,
    pub ticket_class: u64,
    pub date_mode: u64,
    pub ownership: u64,
    pub validity_days: u64,
    pub valid_until: NaiveDate,
}

/// Decodes every field of a stripe record.
pub fn decode_ticket(record: &RawRecord) -> Result<DecodedTicket, StripeError> {
    let seq = BitSequence::from_record(record);
    let field = |spec: &FieldSpec| {
        let value = decode(&seq, spec)?;
        trace!(field = spec.name, value, "decoded field");
        Ok::<_, StripeError>(value)
    };

    let origin = LocationCode::from_raw(field(&ORIGIN_PREFIX)?, field(&ORIGIN_SUFFIX)?)?;
    let destination =
        LocationCode::from_raw(field(&DESTINATION_PREFIX)?, field(&DESTINATION_SUFFIX)?)?;
    let ltot = Ltot::from_raw(field(&LTOT)?)?;
    let validity_days = field(&END_OF_VALIDITY)?;
    let valid_until = expiry_date(validity_days)?;

    Ok(DecodedTicket {
        origin,
        destination,
        route: field(&ROUTE)?,
        ltot,
        status: field(&STATUS)?,
        ticket_class: field(&TICKET_CLASS)?,
        date_mode: field(&DATE_MODE)?,
        ownership: field(&OWNERSHIP)?,
        validity_days,
        valid_until,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::stripe::{LAYOUT, RECORD_BITS};

    /// A sequence with only `field` set to `value`, every other bit clear.
    fn isolated(field: &FieldSpec, value: u64) -> BitSequence {
        let range = field.physical_range(RECORD_BITS).unwrap();
        let mut bits = vec![false; RECORD_BITS];
        for (i, pos) in range.enumerate() {
            let shift = field.width as usize - 1 - i;
            bits[pos] = (value >> shift) & 1 == 1;
        }
        BitSequence::from_bits(&bits).unwrap()
    }

    #[test]
    fn each_field_reads_in_isolation() {
        for field in LAYOUT {
            let max = (1u64 << field.width) - 1;
            for value in [0, 1, max, max / 3, (max >> 1) + 1] {
                let seq = isolated(&field, value);
                assert_eq!(decode(&seq, &field).unwrap(), value, "{}", field.name);
            }
        }
    }

    #[test]
    fn first_bit_is_most_significant() {
        let seq = isolated(&ROUTE, 0b100_0000_0000);
        let range = ROUTE.physical_range(RECORD_BITS).unwrap();
        assert_eq!(seq.bit(range.start), Some(true));
        assert_eq!(decode(&seq, &ROUTE).unwrap(), 1024);
    }

    #[test]
    fn decode_rejects_field_outside_record() {
        let seq = BitSequence::build(&[0u8; 19]).unwrap();
        let bogus = FieldSpec::new("bogus", 200, 4);
        assert!(matches!(
            decode(&seq, &bogus),
            Err(StripeError::FieldRange { field: "bogus", .. })
        ));
    }

    #[test]
    fn decode_golden_record() {
        let record = RawRecord::from_hex("41AA1120D7004198C80008000180044026AB20").unwrap();
        let ticket = decode_ticket(&record).unwrap();

        assert_eq!(ticket.origin.to_string(), "G298");
        assert_eq!(ticket.destination.to_string(), "O513");
        assert_eq!(ticket.route, 470);
        assert_eq!(ticket.ltot.as_str(), "AE");
        assert_eq!(ticket.status, 8);
        assert_eq!(ticket.ticket_class, 0);
        assert_eq!(ticket.date_mode, 33);
        assert_eq!(ticket.ownership, 3);
        assert_eq!(ticket.validity_days, 106);
        assert_eq!(ticket.valid_until, NaiveDate::from_ymd_opt(1997, 4, 17).unwrap());
    }

    #[test]
    fn decode_all_zero_record() {
        let record = RawRecord::from_bytes(&[0u8; 19]).unwrap();
        let ticket = decode_ticket(&record).unwrap();
        assert_eq!(ticket.origin.to_string(), "00");
        assert_eq!(ticket.ltot.as_str(), "AA");
        assert_eq!(ticket.valid_until, crate::domain::FORMAT_EPOCH);
    }

    #[test]
    fn ltot_past_z_is_fatal() {
        // All ones gives LTOT halves of 31
        let record = RawRecord::from_bytes(&[0xFF; 19]).unwrap();
        assert!(matches!(
            decode_ticket(&record),
            Err(StripeError::Domain(DomainError::AlphabetRange { index: 31, .. }))
        ));
    }

    #[test]
    fn decoding_is_deterministic() {
        let record = RawRecord::from_hex("41AA1120D7004198C80008000180044026AB20").unwrap();
        assert_eq!(decode_ticket(&record).unwrap(), decode_ticket(&record).unwrap());
    }
}
