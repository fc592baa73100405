use crate::error::WireError;

/// Every pair value is offset by 45 so the smallest base64 character,
/// `+` (0x2B), encodes as `00` and the whole alphabet fits in two
/// decimal digits — the densest QR numeric-mode packing.
pub const DIGIT_OFFSET: u8 = 45;

/// Pair value marking the end of a section (`.`; 46, i.e. the pair `01`).
pub const SECTION_DELIMITER: u8 = 46;

/// How a section's transcoding stopped.
///
/// End-of-input is a valid terminator: the final section of a card has
/// no trailing delimiter, it simply runs to the end of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionEnd {
    /// A pair decoded to the delimiter value (consumed, not emitted).
    Delimiter,
    /// The input slice was exhausted on a pair boundary.
    EndOfInput,
}

/// One transcoded section of the digit stream.
///
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │ TranscodedSection                                         │
/// │   base64:   Vec<u8>    ← standard-alphabet base64 ASCII   │
/// │   consumed: usize      ← input bytes eaten, delimiter incl │
/// │   end:      SectionEnd ← Delimiter | EndOfInput           │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// `consumed` includes the delimiter pair when one was found, so the
/// next section starts at `&input[consumed..]` with no extra seek.
#[derive(Debug, PartialEq, Eq)]
pub struct TranscodedSection {
    /// Base64 ASCII with the URL-safe characters already normalised
    /// (`-` → `+`, `_` → `/`).
    pub base64: Vec<u8>,

    /// Number of input bytes consumed, including the delimiter pair.
    pub consumed: usize,

    /// Why transcoding stopped.
    pub end: SectionEnd,
}

/// Transcode one section of digit pairs into base64-alphabet ASCII.
///
/// Each pair `(a, b)` of ASCII digits encodes the character
/// `45 + 10*a + b`. The URL-safe substitutions are undone on the fly
/// (value 45 emits `+`, value 95 emits `/`) so the output decodes with
/// a standard-alphabet base64 routine. Value 46 is the section
/// delimiter and is never emitted.
///
/// # Errors
///
/// - [`WireError::NonDigit`] if either pair byte is not `0`..=`9`.
/// - [`WireError::TruncatedPair`] if the input ends after the first
///   byte of a pair.
/// - [`WireError::NotAscii`] if a pair decodes above 127 (pairs
///   `83`..=`99` — representable in two digits, but no base64
///   character lives there).
/// - [`WireError::Allocation`] if the output buffer cannot be reserved.
pub fn transcode_section(input: &[u8]) -> Result<TranscodedSection, WireError> {
    // One output byte per pair, at most.
    let upper = input.len() / 2;
    let mut base64 = Vec::new();
    base64
        .try_reserve_exact(upper)
        .map_err(|_| WireError::Allocation { bytes: upper })?;

    let mut offset = 0;
    let mut end = SectionEnd::EndOfInput;

    while offset < input.len() {
        if offset + 1 >= input.len() {
            return Err(WireError::TruncatedPair { offset });
        }

        let (a, b) = (input[offset], input[offset + 1]);
        for byte in [a, b] {
            if !byte.is_ascii_digit() {
                return Err(WireError::NonDigit { offset, byte });
            }
        }
        offset += 2;

        // Both digits checked, so the sum stays within 45 + 99 = 144.
        let value = DIGIT_OFFSET + 10 * (a - b'0') + (b - b'0');
        if !value.is_ascii() {
            return Err(WireError::NotAscii {
                offset: offset - 2,
                value,
            });
        }

        if value == SECTION_DELIMITER {
            end = SectionEnd::Delimiter;
            break;
        }

        // Undo the URL-safe alphabet substitution.
        let ch = match value {
            45 => b'+',
            95 => b'/',
            other => other,
        };
        base64.push(ch);
    }

    Ok(TranscodedSection {
        base64,
        consumed: offset,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Digit-pair encode a base64 string (the transcoder's inverse).
    fn pairs(b64: &str) -> Vec<u8> {
        b64.bytes()
            .flat_map(|c| {
                let v = c - DIGIT_OFFSET;
                [b'0' + v / 10, b'0' + v % 10]
            })
            .collect()
    }

    #[test]
    fn transcodes_jws_header_section() {
        let input = pairs("eyJhbGciOiJFUzI1NiJ9");
        let section = transcode_section(&input).unwrap();
        assert_eq!(section.base64, b"eyJhbGciOiJFUzI1NiJ9");
        assert_eq!(section.consumed, input.len());
        assert_eq!(section.end, SectionEnd::EndOfInput);
    }

    #[test]
    fn stops_at_delimiter_and_consumes_it() {
        // "AB" then delimiter (pair 01) then more pairs that must not
        // be touched.
        let mut input = pairs("AB");
        input.extend_from_slice(b"01");
        input.extend_from_slice(&pairs("CD"));

        let section = transcode_section(&input).unwrap();
        assert_eq!(section.base64, b"AB");
        assert_eq!(section.consumed, 6);
        assert_eq!(section.end, SectionEnd::Delimiter);

        // The remainder is exactly the second section.
        let rest = transcode_section(&input[section.consumed..]).unwrap();
        assert_eq!(rest.base64, b"CD");
        assert_eq!(rest.end, SectionEnd::EndOfInput);
    }

    #[test]
    fn delimiter_at_position_k_stops_at_k_pairs() {
        let mut input = pairs("QRSTUVWX");
        input.extend_from_slice(b"01");
        // Garbage after the delimiter, including non-digits — must be
        // ignored entirely.
        input.extend_from_slice(b"zz!!");

        let section = transcode_section(&input).unwrap();
        assert_eq!(section.base64.len(), 8);
        assert_eq!(section.consumed, 18);
    }

    #[test]
    fn normalises_url_safe_alphabet() {
        // '-' is 45 → pair 00, '_' is 95 → pair 50.
        let section = transcode_section(b"0050").unwrap();
        assert_eq!(section.base64, b"+/");
    }

    #[test]
    fn empty_input_is_an_empty_section() {
        let section = transcode_section(b"").unwrap();
        assert!(section.base64.is_empty());
        assert_eq!(section.consumed, 0);
        assert_eq!(section.end, SectionEnd::EndOfInput);
    }

    #[test]
    fn reject_non_digit_in_first_position() {
        let result = transcode_section(b"56a9");
        assert!(matches!(
            result,
            Err(WireError::NonDigit {
                offset: 2,
                byte: b'a'
            })
        ));
    }

    #[test]
    fn reject_non_digit_in_second_position() {
        let result = transcode_section(b"5x");
        assert!(matches!(
            result,
            Err(WireError::NonDigit {
                offset: 0,
                byte: b'x'
            })
        ));
    }

    #[test]
    fn reject_trailing_lone_digit() {
        let mut input = pairs("AB");
        input.push(b'7');
        let result = transcode_section(&input);
        assert!(matches!(result, Err(WireError::TruncatedPair { offset: 4 })));
    }

    #[test]
    fn reject_pairs_above_ascii() {
        // 45 + 99 = 144, beyond any base64 character.
        let result = transcode_section(b"99");
        assert!(matches!(
            result,
            Err(WireError::NotAscii {
                offset: 0,
                value: 144
            })
        ));
    }

    #[test]
    fn boundary_pair_82_is_still_ascii() {
        // 45 + 82 = 127 (DEL) — still ASCII, passes the transcoder and
        // is left for the base64 decoder to reject.
        let section = transcode_section(b"82").unwrap();
        assert_eq!(section.base64, [127]);
    }
}
