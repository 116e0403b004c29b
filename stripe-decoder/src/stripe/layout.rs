//! Field layout of the RSPS3000 stripe record.
//!
//! Field positions are numbered from the least significant end of the
//! record: `start` is the position of a field's highest-order bit and
//! `width` its length in bits.

use std::ops::Range;

use super::StripeError;

/// Bits of header and trailer in the raw record that lie outside the
/// numbered payload.
pub const HEADER_ADJUSTMENT_BITS: i64 = 24;

/// Where a named field lives in a stripe record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: u32,
    pub width: u32,
}

impl FieldSpec {
    pub const fn new(name: &'static str, start: u32, width: u32) -> Self {
        Self { name, start, width }
    }

    /// Converts this field's numbered position into an index range of a
    /// sequence of `len` bits.
    pub fn physical_range(&self, len: usize) -> Result<Range<usize>, StripeError> {
        let out_of_range = || StripeError::FieldRange {
            field: self.name,
            start: self.start,
            width: self.width,
            len,
        };

        let len_bits = i64::try_from(len).map_err(|_| out_of_range())?;
        let first = len_bits - self.start as i64 - self.width as i64 + HEADER_ADJUSTMENT_BITS;
        let end = first + self.width as i64;

        if first < 0 || end > len_bits {
            return Err(out_of_range());
        }

        Ok(first as usize..end as usize)
    }
}

pub const ORIGIN_PREFIX: FieldSpec = FieldSpec::new("origin prefix", 171, 5);
pub const ORIGIN_SUFFIX: FieldSpec = FieldSpec::new("origin suffix", 161, 10);
pub const DESTINATION_PREFIX: FieldSpec = FieldSpec::new("destination prefix", 156, 5);
pub const DESTINATION_SUFFIX: FieldSpec = FieldSpec::new("destination suffix", 146, 10);
pub const ROUTE: FieldSpec = FieldSpec::new("route", 135, 11);
pub const LTOT: FieldSpec = FieldSpec::new("LTOT", 125, 10);
pub const STATUS: FieldSpec = FieldSpec::new("status", 118, 7);
pub const TICKET_CLASS: FieldSpec = FieldSpec::new("ticket class", 117, 1);
// Overlaps status and ticket class; kept as published.
pub const DATE_MODE: FieldSpec = FieldSpec::new("date mode", 116, 11);
pub const OWNERSHIP: FieldSpec = FieldSpec::new("ownership", 104, 2);
pub const END_OF_VALIDITY: FieldSpec = FieldSpec::new("end of validity", 33, 9);

/// Every decoded field, in record order.
pub const LAYOUT: [FieldSpec; 11] = [
    ORIGIN_PREFIX,
    ORIGIN_SUFFIX,
    DESTINATION_PREFIX,
    DESTINATION_SUFFIX,
    ROUTE,
    LTOT,
    STATUS,
    TICKET_CLASS,
    DATE_MODE,
    OWNERSHIP,
    END_OF_VALIDITY,
];
