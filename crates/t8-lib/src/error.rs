//! Error taxonomy for the T8 client library

use thiserror::Error;

/// Errors produced while decoding payloads or interpreting API records.
#[derive(Debug, Error)]
pub enum T8Error {
    /// The payload string is not valid base64.
    #[error("base64 decode failed: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The base64-decoded bytes are not a valid zlib stream.
    #[error("zlib decompression failed: {0}")]
    Decompression(#[source] std::io::Error),

    /// The inflated buffer has an odd byte count and cannot be split
    /// into complete 16-bit samples.
    #[error("malformed payload: inflated length {len} is not a multiple of 2")]
    MalformedPayload { len: usize },

    /// The server named an array format this client does not decode.
    #[error("unsupported array format {0:?}")]
    UnsupportedFormat(String),

    /// A date string did not match `YYYY-MM-DDTHH:MM:SS`.
    #[error("invalid date {0:?}, expected YYYY-MM-DDTHH:MM:SS (UTC)")]
    InvalidTimestamp(String),

    /// A required key was absent from an API record.
    #[error("missing required field {0:?} in API response")]
    MissingField(&'static str),

    /// A metadata field was present but unusable.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
}
