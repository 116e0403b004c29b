//! Symbol alphabets used by coded stripe fields.

use super::DomainError;

/// A fixed, ordered set of ASCII symbols addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    symbols: &'static [u8],
}

/// 32-symbol alphabet for the letter part of a location code.
pub const LOCATION_PREFIXES: Alphabet = Alphabet {
    name: "location prefix",
    symbols: b"0123456789ABCDEFGHIJKLMNOPQRSTUV",
};

/// The 26 uppercase letters used by LTOT codes.
pub const LETTERS: Alphabet = Alphabet {
    name: "letter",
    symbols: b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
};

impl Alphabet {
    /// Returns the symbol at `index`.
    ///
    /// Indices past the end are an error rather than wrapping.
    pub fn symbol(&self, index: u64) -> Result<char, DomainError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.symbols.get(i))
            .map(|&b| b as char)
            .ok_or(DomainError::AlphabetRange {
                alphabet: self.name,
                index,
                len: self.symbols.len(),
            })
    }

    /// Returns the index of `symbol`, if it belongs to the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<u64> {
        self.symbols
            .iter()
            .position(|&b| b as char == symbol)
            .map(|i| i as u64)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every 5-bit value maps into the location prefix alphabet
        #[test]
        fn five_bit_prefix_in_alphabet(raw in 0u64..32) {
            let c = LOCATION_PREFIXES.symbol(raw).unwrap();
            prop_assert!("0123456789ABCDEFGHIJKLMNOPQRSTUV".contains(c));
            prop_assert_eq!(LOCATION_PREFIXES.index_of(c), Some(raw));
        }
    }
}
