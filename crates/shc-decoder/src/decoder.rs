use std::io::Read;

use shc_wire::digit_pairs::{self, SectionEnd};
use shc_wire::scheme;

use crate::base64_section;
use crate::error::DecodeError;
use crate::inflate;
use crate::pack::PackedWords;

/// The result of decoding an SHC card.
///
/// Both fields are the raw JWS segment bytes, expected (but not
/// validated) to be UTF-8 JSON text. The signature segment is not part
/// of the QR numeric encoding handled here.
///
/// ```text
/// ┌─────────────────────────────────────────────────┐
/// │ DecodedJws                                      │
/// │   header:  Vec<u8>  ← e.g. {"alg":"ES256",...}  │
/// │   payload: Vec<u8>  ← inflated claims JSON      │
/// └─────────────────────────────────────────────────┘
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct DecodedJws {
    /// The JWS protected header, base64-decoded, emitted as-is.
    pub header: Vec<u8>,

    /// The JWS payload, base64-decoded and inflated, truncated at the
    /// first NUL byte when one is present.
    pub payload: Vec<u8>,
}

/// Synchronous SHC decoder — turns QR numeric text into JWS parts.
///
/// Decoding is a linear pipeline with no branching back:
///
///   1. **Prefix**: literal-match the 5-byte `shc:/` scheme token.
///      Any mismatch rejects the input before a single pair is read.
///   2. **Header**: transcode digit pairs up to the section delimiter,
///      then base64-decode. The result is emitted untouched.
///   3. **Payload**: transcode the remaining pairs to end-of-input,
///      base64-decode, regroup into little-endian words, and inflate
///      the raw DEFLATE stream. The inflated text is truncated at the
///      first NUL byte if one occurs.
///   4. **Done**: no further input is consumed.
///
/// The pipeline is strictly sequential and single-threaded; each stage
/// owns its scratch buffer until it hands the result forward.
///
/// # Example
///
/// ```no_run
/// use shc_decoder::ShcDecoder;
///
/// let text = std::fs::read("card.txt").unwrap();
/// let jws = ShcDecoder::decode(&text).unwrap();
/// println!("{}", String::from_utf8_lossy(&jws.header));
/// ```
pub struct ShcDecoder;

impl ShcDecoder {
    /// Decode a complete card from a byte slice.
    ///
    /// # Errors
    ///
    /// - [`shc_wire::WireError::BadPrefix`] (via [`DecodeError::Wire`])
    ///   if the input does not begin with `shc:/`.
    /// - [`shc_wire::WireError::NonDigit`] / `TruncatedPair` /
    ///   `NotAscii` for malformed digit pairs.
    /// - [`DecodeError::InvalidBase64`] if a section is not valid
    ///   base64 after transcoding.
    /// - [`DecodeError::DecompressionFailed`] if the payload's DEFLATE
    ///   stream is malformed or truncated.
    /// - [`DecodeError::Allocation`] if a pipeline buffer cannot be
    ///   reserved.
    pub fn decode(input: &[u8]) -> Result<DecodedJws, DecodeError> {
        // 1. Prefix.
        let stream = scheme::strip_scheme(input)?;

        // 2. Header section.
        let header_section = digit_pairs::transcode_section(stream)?;
        let header = base64_section::decode(&header_section.base64, "header")?;

        // 3. Payload section — begins immediately after the header's
        //    terminating pair. A card whose header ran to end-of-input
        //    leaves an empty payload section, which fails in the
        //    inflater rather than being special-cased here.
        debug_assert!(
            header_section.end == SectionEnd::Delimiter
                || header_section.consumed == stream.len()
        );
        let payload_section = digit_pairs::transcode_section(&stream[header_section.consumed..])?;
        let decoded = base64_section::decode(&payload_section.base64, "payload")?;
        let packed = PackedWords::from_bytes(&decoded)?;
        let inflated = inflate::inflate_raw(&packed.to_bytes()?)?;

        // 4. Done.
        Ok(DecodedJws {
            header,
            payload: truncate_at_nul(inflated),
        })
    }

    /// Read a stream to its end and decode it as a card.
    ///
    /// The reader is scoped to this call; it is dropped (and any
    /// underlying handle closed) on every exit path, including errors.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Io`] if the read fails, plus everything
    /// [`decode`](Self::decode) can return.
    pub fn decode_reader(mut reader: impl Read) -> Result<DecodedJws, DecodeError> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        Self::decode(&input)
    }
}

/// Keep the prefix of `bytes` up to (excluding) the first NUL.
///
/// The inflated payload is logically NUL-or-buffer-bounded text; this
/// is the explicit form of that rule rather than an accidental
/// string-termination artifact.
fn truncate_at_nul(mut bytes: Vec<u8>) -> Vec<u8> {
    if let Some(nul) = bytes.iter().position(|&b| b == 0) {
        bytes.truncate(nul);
    }
    bytes
}
