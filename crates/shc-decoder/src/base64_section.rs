// Base64 decoding for one transcoded section.
//
// The digit-pair transcoder has already folded the URL-safe alphabet
// back to the standard one, and JWS segments carry no padding, so the
// standard no-pad engine is the exact fit. Decoding is stateless per
// call; nothing is carried between the header and payload sections.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;

use crate::error::DecodeError;

/// Decode a transcoded section's base64 ASCII into raw bytes.
///
/// `section` names the section ("header" or "payload") for diagnostics.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase64`] for characters outside the
/// standard alphabet, an impossible length (4n+1), or non-canonical
/// trailing bits.
pub fn decode(ascii: &[u8], section: &'static str) -> Result<Vec<u8>, DecodeError> {
    STANDARD_NO_PAD
        .decode(ascii)
        .map_err(|source| DecodeError::InvalidBase64 { section, source })
}
