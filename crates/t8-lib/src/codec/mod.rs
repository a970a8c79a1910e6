//! Array format registry
//!
//! The T8 API names the payload encoding in the `array_fmt` query
//! parameter, so the decoder is dispatched on that name rather than
//! hardcoded. Only `zint` exists today; new formats slot in as variants.

mod zint;

use crate::error::T8Error;

/// A payload encoding supported by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codec {
    /// zlib-compressed, base64-encoded array of little-endian i16 samples.
    #[default]
    Zint,
}

impl Codec {
    /// Look up a codec by its wire name.
    pub fn from_name(name: &str) -> Result<Self, T8Error> {
        match name {
            "zint" => Ok(Codec::Zint),
            other => Err(T8Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// The name sent in the `array_fmt` query parameter.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Codec::Zint => "zint",
        }
    }

    /// Decode an encoded payload string into raw samples as f32.
    ///
    /// Scaling by the server-supplied factor is the caller's job; the
    /// decoder reproduces the stored integers exactly.
    pub fn decode(&self, payload: &str) -> Result<Vec<f32>, T8Error> {
        match self {
            Codec::Zint => zint::decode(payload),
        }
    }
}
