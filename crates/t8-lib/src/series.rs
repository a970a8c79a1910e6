//! Series construction
//!
//! Maps raw decoded samples onto a synthetic X axis and scales them into
//! physical units. Time-domain signals get an axis in milliseconds derived
//! from the sample rate; spectra get one in hertz spanning the analysis
//! band. Both axes are evenly spaced and include both endpoints.

use crate::error::T8Error;

pub const TIME_LABEL: &str = "Time (ms)";
pub const FREQUENCY_LABEL: &str = "Frequency (Hz)";
pub const AMPLITUDE_LABEL: &str = "Amplitude";

/// A pair of equal-length axes in physical units, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl Series {
    /// Build a waveform series: X spans `[0, (n / sample_rate) * 1000]`
    /// milliseconds, Y is each sample times `factor`.
    pub fn time_domain(samples: Vec<f32>, sample_rate: f64, factor: f64) -> Result<Self, T8Error> {
        if sample_rate <= 0.0 {
            return Err(T8Error::InvalidMetadata(format!(
                "sample_rate must be positive, got {sample_rate}"
            )));
        }
        let span_ms = (samples.len() as f64 / sample_rate) * 1000.0;
        Ok(Series {
            x: linspace(0.0, span_ms, samples.len()),
            y: scale(samples, factor),
            x_label: TIME_LABEL,
            y_label: AMPLITUDE_LABEL,
        })
    }

    /// Build a spectrum series: X spans `[min_freq, max_freq]` hertz.
    pub fn frequency_domain(
        samples: Vec<f32>,
        min_freq: f64,
        max_freq: f64,
        factor: f64,
    ) -> Result<Self, T8Error> {
        if max_freq < min_freq {
            return Err(T8Error::InvalidMetadata(format!(
                "max_freq {max_freq} is below min_freq {min_freq}"
            )));
        }
        Ok(Series {
            x: linspace(min_freq, max_freq, samples.len()),
            y: scale(samples, factor),
            x_label: FREQUENCY_LABEL,
            y_label: AMPLITUDE_LABEL,
        })
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// `n` evenly spaced points over `[start, stop]`, both endpoints included.
/// One point collapses to `start`; zero points to an empty axis.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start as f32],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| (start + step * i as f64) as f32).collect()
        }
    }
}

fn scale(samples: Vec<f32>, factor: f64) -> Vec<f32> {
    samples.into_iter().map(|s| (s as f64 * factor) as f32).collect()
}
