#![warn(clippy::pedantic)]

//! Fixture builders for the SHC decode pipeline — the encode direction.
//!
//! The production crates only decode; round-trip and conformance tests
//! need the inverse of every stage, so it lives here:
//!
//! ```text
//! bytes ── deflate_raw ──► raw DEFLATE ── b64url ──► base64url text
//!                                                        │
//!                              digit_pairs ◄─────────────┘
//!                                   │
//!                 "shc:/" + header pairs + "01" + payload pairs
//! ```
//!
//! `unwrap` is fine here: this crate never ships, and a panic in a
//! fixture builder is a broken test, not a broken decoder.

use std::io::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// The digit pair encoding the section delimiter (value 46, `.`).
pub const DELIMITER_PAIRS: &str = "01";

/// Base64url-encode without padding, as JWS segments are carried.
#[must_use]
pub fn b64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Compress to a raw DEFLATE stream (no zlib header, no trailer).
#[must_use]
pub fn deflate_raw(bytes: &[u8]) -> Vec<u8> {
    let mut encoder =
        flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::best());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

/// Digit-pair encode a base64url string: each character becomes the
/// two-decimal-digit value `char - 45`.
///
/// # Panics
///
/// Panics if a character is outside the 45..=144 encodable window —
/// every base64url character is inside it.
#[must_use]
pub fn digit_pairs(b64: &str) -> String {
    b64.bytes()
        .map(|c| {
            let v = c.checked_sub(45).expect("character below the pair window");
            assert!(v < 100, "character above the pair window");
            format!("{v:02}")
        })
        .collect()
}

/// Build a complete card line from JWS header bytes and uncompressed
/// payload bytes.
#[must_use]
pub fn encode_card(header: &[u8], payload: &[u8]) -> String {
    encode_card_from_compressed(header, &deflate_raw(payload))
}

/// Build a card line from header bytes and an already-compressed
/// payload stream. Lets tests plant malformed DEFLATE data.
#[must_use]
pub fn encode_card_from_compressed(header: &[u8], compressed: &[u8]) -> String {
    format!(
        "shc:/{}{DELIMITER_PAIRS}{}",
        digit_pairs(&b64url(header)),
        digit_pairs(&b64url(compressed)),
    )
}
