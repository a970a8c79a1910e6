//! Core library for the T8 condition-monitoring client
//!
//! This crate provides the pieces of the client that do not touch the
//! network or the filesystem:
//! - zint payload decoding (base64 + zlib + packed i16)
//! - series construction for time and frequency domains
//! - UTC timestamp conversion
//! - snapshot listing extraction
//! - wire models for the REST API responses

pub mod codec;
pub mod error;
pub mod listing;
pub mod models;
pub mod series;
pub mod timestamp;

pub use codec::Codec;
pub use error::T8Error;
pub use models::{ListingItem, ListingResponse, SpectrumRecord, WaveRecord};
pub use series::Series;
