use crate::error::DecodeError;

/// Payload bytes regrouped into 4-byte little-endian words.
///
/// The inflater's input is framed in native-width words rather than
/// bytes; this adapter only regroups, it never reorders or rewrites a
/// byte. Both directions use explicit little-endian conversions, so
/// `from_bytes(b).to_bytes()` is `b` (plus tail padding) on every
/// target — the grouping carries no host-endianness dependence.
///
/// ```text
/// bytes:  a1 b2 c3 d4 | e5 f6
/// words:  0xd4c3b2a1  | 0x0000f6e5   ← tail zero-padded
/// back:   a1 b2 c3 d4 | e5 f6 00 00
/// ```
///
/// The up-to-3 padding zeros sit after the DEFLATE end-of-stream
/// marker and are ignored by the inflater.
#[derive(Debug, PartialEq, Eq)]
pub struct PackedWords {
    words: Vec<u32>,
}

impl PackedWords {
    /// Group decoded payload bytes into little-endian words, zero-padding
    /// the final partial group.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Allocation`] if the word buffer cannot be
    /// reserved.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let count = bytes.len().div_ceil(4);
        let mut words = Vec::new();
        words
            .try_reserve_exact(count)
            .map_err(|_| DecodeError::Allocation {
                bytes: count * 4,
                what: "packed payload words",
            })?;

        for group in bytes.chunks(4) {
            let mut quad = [0u8; 4];
            quad[..group.len()].copy_from_slice(group);
            words.push(u32::from_le_bytes(quad));
        }

        Ok(Self { words })
    }

    /// The packed words in payload order.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Serialise the words back into the byte sequence handed to the
    /// inflater. Length is always a multiple of 4.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Allocation`] if the byte buffer cannot be
    /// reserved.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        let len = self.words.len() * 4;
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| DecodeError::Allocation {
                bytes: len,
                what: "inflater input",
            })?;

        for word in &self.words {
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        Ok(bytes)
    }
}
