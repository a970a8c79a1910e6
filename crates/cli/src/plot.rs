//! PNG chart sink
//!
//! Renders a series as a line chart with the axis labels from the series
//! and a grid, written to a PNG file. An empty series still produces a
//! valid (blank) chart.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use t8_lib::Series;

const CHART_SIZE: (u32, u32) = (1024, 768);

/// Render a series to a PNG chart at `path`.
pub fn render_png(path: &Path, title: &str, series: &Series) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("failed to prepare chart canvas: {e}"))?;

    let (x_min, x_max) = axis_bounds(&series.x);
    let (y_min, y_max) = axis_bounds(&series.y);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("failed to lay out chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc(series.x_label)
        .y_desc(series.y_label)
        .draw()
        .map_err(|e| anyhow!("failed to draw chart grid: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            series.x.iter().zip(&series.y).map(|(&x, &y)| (x, y)),
            &BLUE,
        ))
        .map_err(|e| anyhow!("failed to draw series: {e}"))?;

    root.present()
        .map_err(|e| anyhow!("failed to write chart to {}: {e}", path.display()))?;
    Ok(())
}

/// Plot range for one axis. Degenerate inputs (empty axis, constant
/// signal) are widened so plotters always gets a non-empty range.
fn axis_bounds(values: &[f32]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}
