use crate::error::WireError;

/// Scheme token: ASCII "shc:/".
/// Stored as raw bytes so the comparison is a plain slice compare,
/// case-sensitive, no string allocation.
pub const SHC_SCHEME: [u8; 5] = *b"shc:/";

/// Length of the scheme token in bytes.
pub const SCHEME_LEN: usize = SHC_SCHEME.len();

/// Strip the leading `shc:/` token and return the digit stream after it.
///
/// This is the single point where non-SHC input is rejected — nothing
/// past the prefix is examined here, so digit-pair errors can never be
/// reported for a stream that was not an SHC card to begin with.
///
/// # Errors
///
/// Returns [`WireError::BadPrefix`] if the input is shorter than the
/// token or does not start with it exactly.
pub fn strip_scheme(input: &[u8]) -> Result<&[u8], WireError> {
    if input.len() < SCHEME_LEN || input[..SCHEME_LEN] != SHC_SCHEME {
        return Err(WireError::BadPrefix);
    }
    Ok(&input[SCHEME_LEN..])
}
