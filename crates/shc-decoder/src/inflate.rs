// Raw DEFLATE inflation.
//
// SHC payloads are compressed as a bare DEFLATE stream — no zlib
// 2-byte header, no gzip wrapper, no checksum trailer — so the
// decompressor runs with a raw window (`Decompress::new(false)`, the
// equivalent of a negative window size in zlib terms).
//
// Raw DEFLATE carries no uncompressed-size field, so the output length
// is unknown up front. The output vector is seeded at a typical
// compression ratio and extended whenever the inflater stalls on
// output space; it never truncates a stream that beats the seed ratio.

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::DecodeError;

/// Seed the output at this multiple of the compressed length.
const SEED_RATIO: usize = 4;

/// Minimum capacity to add when the output fills up.
const GROW_BYTES: usize = 16 * 1024;

/// Inflate a raw DEFLATE stream to completion.
///
/// Trailing input after the end-of-stream marker (the word packer's
/// zero padding) is ignored.
///
/// # Errors
///
/// - [`DecodeError::DecompressionFailed`] if the stream is malformed,
///   or if the input is exhausted before the stream signals completion.
/// - [`DecodeError::Allocation`] if the output buffer cannot be grown.
pub fn inflate_raw(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut inflater = Decompress::new(false);
    let mut out = Vec::new();
    reserve(&mut out, input.len().saturating_mul(SEED_RATIO).max(64))?;

    loop {
        let consumed = usize::try_from(inflater.total_in()).unwrap_or(usize::MAX);
        let status = inflater
            .decompress_vec(&input[consumed.min(input.len())..], &mut out, FlushDecompress::Finish)
            .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                if out.len() < out.capacity() {
                    // Output space was not the constraint, so the input
                    // ran dry mid-stream.
                    return Err(DecodeError::DecompressionFailed(
                        "stream ended before the DEFLATE end marker".to_string(),
                    ));
                }
                reserve(&mut out, GROW_BYTES)?;
            }
        }
    }
}

fn reserve(out: &mut Vec<u8>, additional: usize) -> Result<(), DecodeError> {
    out.try_reserve(additional)
        .map_err(|_| DecodeError::Allocation {
            bytes: additional,
            what: "inflated payload",
        })
}
