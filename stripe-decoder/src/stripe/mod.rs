//! Stripe record decoding.
//!
//! A stripe carries a fixed 19-byte record. Decoding runs in two stages:
//! - [`BitSequence::build`] reverses the bit order of every byte, since the
//!   stripe records each byte least-significant bit first
//! - [`decode_ticket`] reads each field of [`LAYOUT`] from that sequence and
//!   converts the raw integers into domain values

mod bits;
mod decode;
mod error;
mod layout;
mod record;

pub use bits::{BitSequence, reverse_byte};
pub use decode::{DecodedTicket, decode, decode_ticket};
pub use error::StripeError;
pub use layout::{
    DATE_MODE, DESTINATION_PREFIX, DESTINATION_SUFFIX, END_OF_VALIDITY, FieldSpec,
    HEADER_ADJUSTMENT_BITS, LAYOUT, LTOT, ORIGIN_PREFIX, ORIGIN_SUFFIX, OWNERSHIP, ROUTE,
    STATUS, TICKET_CLASS,
};
pub use record::{HEX_LEN, RECORD_BITS, RECORD_LEN, RawRecord, parse_records};
