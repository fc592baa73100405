use shc_wire::WireError;

/// Errors that can occur while decoding an SHC card into its JWS parts.
///
/// Every variant is fatal to the decode in progress: the pipeline
/// performs no retries and salvages no partial result. Callers that
/// iterate over many candidate files treat a failed card as rejected
/// and move on.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── InvalidBase64         ← section content is not valid base64
///   ├── DecompressionFailed   ← raw DEFLATE stream malformed/truncated
///   ├── Allocation            ← a pipeline buffer could not be reserved
///   ├── Wire(WireError)       ← prefix / digit-pair level failure
///   └── Io(std::io::Error)    ← from the underlying stream read
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A transcoded section failed base64 decoding.
    ///
    /// The transcoder only guarantees ASCII in the 45..=127 range; it
    /// is this stage that rejects characters outside the base64
    /// alphabet and non-canonical trailing bits.
    #[error("invalid base64 in {section} section: {source}")]
    InvalidBase64 {
        section: &'static str,
        source: base64::DecodeError,
    },

    /// The raw DEFLATE stream was malformed, or ended without the
    /// end-of-stream marker.
    #[error("raw DEFLATE decompression failed: {0}")]
    DecompressionFailed(String),

    /// A pipeline buffer could not be reserved.
    #[error("failed to reserve {bytes} bytes for {what}")]
    Allocation { bytes: usize, what: &'static str },

    /// A scheme-prefix or digit-pair level failure from `shc-wire`.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// An I/O error from the underlying reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
