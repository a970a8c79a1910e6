//! zint payload decoding
//!
//! A zint payload is base64 text wrapping a zlib stream whose inflated
//! bytes are consecutive little-endian signed 16-bit samples. Each stage
//! is a hard precondition for the next, and each failure is reported
//! against the stage that detected it.
//!
//! The byte order is pinned to little-endian regardless of host platform
//! so the decode is bit-identical everywhere.

use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use flate2::read::ZlibDecoder;
use tracing::debug;

use crate::error::T8Error;

/// Decode a zint payload into one f32 per stored i16 sample.
pub fn decode(payload: &str) -> Result<Vec<f32>, T8Error> {
    let compressed = BASE64.decode(payload)?;

    let mut inflated = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut inflated)
        .map_err(T8Error::Decompression)?;

    if inflated.len() % 2 != 0 {
        return Err(T8Error::MalformedPayload {
            len: inflated.len(),
        });
    }

    let samples: Vec<f32> = inflated
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32)
        .collect();

    debug!(
        compressed = compressed.len(),
        inflated = inflated.len(),
        samples = samples.len(),
        "decoded zint payload"
    );

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    // zlib(b64) of the little-endian i16 sequence [1, 2, 3]
    const PAYLOAD_123: &str = "eJxjZGBiYGYAAAAaAAc=";
    // [-1, 0, 32767, -32768, 1234]
    const PAYLOAD_EDGE: &str = "eJz7/5+B4X89Q8MlFgAelATT";
    // zlib of an empty byte buffer
    const PAYLOAD_EMPTY: &str = "eJwDAAAAAAE=";
    // zlib of the 3-byte buffer [0x01, 0x00, 0x02]
    const PAYLOAD_ODD: &str = "eJxjZGACAAAIAAQ=";

    #[test]
    fn decodes_known_vector_exactly() {
        assert_eq!(decode(PAYLOAD_123).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn decodes_full_i16_range() {
        assert_eq!(
            decode(PAYLOAD_EDGE).unwrap(),
            vec![-1.0, 0.0, 32767.0, -32768.0, 1234.0]
        );
    }

    #[test]
    fn empty_stream_yields_empty_samples() {
        assert!(decode(PAYLOAD_EMPTY).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_base64() {
        assert!(matches!(decode("%%%not-base64%%%"), Err(T8Error::Encoding(_))));
    }

    #[test]
    fn rejects_corrupt_zlib_stream() {
        // valid base64 of bytes that are not a zlib stream
        assert!(matches!(
            decode("bm90emxpYmRhdGE="),
            Err(T8Error::Decompression(_))
        ));
    }

    #[test]
    fn rejects_odd_inflated_length() {
        assert!(matches!(
            decode(PAYLOAD_ODD),
            Err(T8Error::MalformedPayload { len: 3 })
        ));
    }
}
