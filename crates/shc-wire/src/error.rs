#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input does not begin with the literal `shc:/` scheme token.
    #[error("input does not begin with the shc:/ scheme prefix")]
    BadPrefix,

    /// A pair byte was not an ASCII digit.
    #[error("non-digit byte {byte:#04X} at offset {offset}")]
    NonDigit { offset: usize, byte: u8 },

    /// Input ended after the first byte of a pair.
    #[error("input ended mid-pair at offset {offset}")]
    TruncatedPair { offset: usize },

    /// A pair decoded to a value outside the ASCII range (pairs 83..=99).
    #[error("pair at offset {offset} decodes to {value}, outside the ASCII range")]
    NotAscii { offset: usize, value: u8 },

    /// The transcode buffer could not be reserved.
    #[error("failed to reserve {bytes} bytes for the transcode buffer")]
    Allocation { bytes: usize },
}
