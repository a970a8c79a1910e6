//! Wire models for the T8 REST API
//!
//! Shapes are consumed as the server sends them. Required-field checks are
//! done explicitly in `into_parts` so a missing `max_freq` surfaces as a
//! named error instead of a generic deserialization failure.

use serde::Deserialize;

use crate::error::T8Error;

/// Collection response for `/rest/waves/...` and `/rest/spectra/...`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    #[serde(rename = "_items", default)]
    pub items: Vec<ListingItem>,
}

/// One entry of a collection response. Partial entries (no `_links` or no
/// `self`) are tolerated and skipped by the listing extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingItem {
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

impl ListingItem {
    /// Build an item from a self URL, for tests and fixtures.
    pub fn with_self_url(url: impl Into<String>) -> Self {
        ListingItem {
            links: Some(Links {
                self_url: Some(url.into()),
            }),
        }
    }

    /// An entry carrying no self-link at all.
    pub fn unlinked() -> Self {
        ListingItem { links: None }
    }
}

/// Single waveform record. The server sends `sample_rate` as either a
/// number or a numeric string; `factor` defaults to 1 when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct WaveRecord {
    pub sample_rate: Option<NumberOrString>,
    pub factor: Option<f64>,
    pub data: Option<String>,
}

impl WaveRecord {
    /// Validate and unpack into `(sample_rate, factor, payload)`.
    pub fn into_parts(self) -> Result<(f64, f64, String), T8Error> {
        let sample_rate = self
            .sample_rate
            .ok_or(T8Error::MissingField("sample_rate"))?
            .as_f64()?;
        let factor = self.factor.unwrap_or(1.0);
        let data = self.data.ok_or(T8Error::MissingField("data"))?;
        Ok((sample_rate, factor, data))
    }
}

/// Single spectrum record. `min_freq` defaults to 0; `max_freq` and
/// `factor` are required.
#[derive(Debug, Clone, Deserialize)]
pub struct SpectrumRecord {
    pub min_freq: Option<f64>,
    pub max_freq: Option<f64>,
    pub factor: Option<f64>,
    pub data: Option<String>,
}

impl SpectrumRecord {
    /// Validate and unpack into `(min_freq, max_freq, factor, payload)`.
    pub fn into_parts(self) -> Result<(f64, f64, f64, String), T8Error> {
        let min_freq = self.min_freq.unwrap_or(0.0);
        let max_freq = self.max_freq.ok_or(T8Error::MissingField("max_freq"))?;
        let factor = self.factor.ok_or(T8Error::MissingField("factor"))?;
        let data = self.data.ok_or(T8Error::MissingField("data"))?;
        Ok((min_freq, max_freq, factor, data))
    }
}

/// A JSON value the server emits sometimes as a number, sometimes as a
/// quoted numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    pub fn as_f64(&self) -> Result<f64, T8Error> {
        match self {
            NumberOrString::Number(n) => Ok(*n),
            NumberOrString::String(s) => s.trim().parse::<f64>().map_err(|_| {
                T8Error::InvalidMetadata(format!("expected a number, got {s:?}"))
            }),
        }
    }
}
