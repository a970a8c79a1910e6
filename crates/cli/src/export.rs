//! CSV export sink
//!
//! One header row with the axis labels, then one row per sample pair. An
//! empty series produces a header-only file.

use std::path::Path;

use anyhow::{Context, Result};
use t8_lib::Series;

/// Write a series to a CSV file at `path`.
pub fn write_csv(path: &Path, series: &Series) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record([series.x_label, series.y_label])?;
    for (x, y) in series.x.iter().zip(&series.y) {
        writer.serialize((x, y))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
