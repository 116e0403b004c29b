//! Addressable bit sequences built from stripe records.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first
//! byte after per-byte reversal.

use super::{RECORD_BITS, RECORD_LEN, RawRecord, StripeError};

/// Reverses the bit order of a byte (bit 7 swaps with bit 0, and so on).
pub fn reverse_byte(byte: u8) -> u8 {
    byte.reverse_bits()
}

/// The 152 bits of a stripe record, in logical (field-numbering) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    bytes: [u8; RECORD_LEN],
}

impl BitSequence {
    /// Build the logical bit sequence from bytes in recording order.
    ///
    /// The stripe records each byte least-significant bit first, so every
    /// byte is reversed before the bytes are concatenated in order.
    pub fn build(bytes: &[u8]) -> Result<Self, StripeError> {
        let record = RawRecord::from_bytes(bytes)?;
        Ok(Self::from_record(&record))
    }

    pub fn from_record(record: &RawRecord) -> Self {
        let bytes = *record.as_bytes();
        Self {
            bytes: bytes.map(reverse_byte),
        }
    }

    /// Build a sequence directly from logical bits, first bit first.
    pub fn from_bits(bits: &[bool]) -> Result<Self, StripeError> {
        if bits.len() != RECORD_BITS {
            return Err(StripeError::InputFormat {
                reason: format!(
                    "bit sequence must be exactly {RECORD_BITS} bits, got {}",
                    bits.len()
                ),
            });
        }

        let mut bytes = [0u8; RECORD_LEN];
        for (i, _) in bits.iter().enumerate().filter(|(_, set)| **set) {
            bytes[i / 8] |= 0x80 >> (i % 8);
        }

        Ok(Self { bytes })
    }

    /// Number of bits in the sequence.
    pub fn len(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bit at `pos`, or `None` past the end.
    pub fn bit(&self, pos: usize) -> Option<bool> {
        let byte = self.bytes.get(pos / 8)?;
        Some((byte >> (7 - pos % 8)) & 1 == 1)
    }

    /// Reads `n` bits starting at `pos` as an unsigned value, MSB-first.
    ///
    /// Returns `None` if the range runs past the end or `n` exceeds 64.
    pub fn read(&self, pos: usize, n: usize) -> Option<u64> {
        if n > 64 || pos.checked_add(n)? > self.len() {
            return None;
        }

        (pos..pos + n).try_fold(0u64, |value, i| {
            self.bit(i).map(|bit| (value << 1) | bit as u64)
        })
    }

    /// Iterates over all bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).filter_map(|i| self.bit(i))
    }
}
