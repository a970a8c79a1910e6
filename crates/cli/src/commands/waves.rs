//! Waveform subcommands

use std::path::Path;

use anyhow::Result;
use t8_lib::{listing, timestamp, Series};

use crate::client::ApiClient;
use crate::commands::snapshot_filename;
use crate::output::{print_info, print_success};
use crate::{export, plot as chart, PointArgs};

/// List the waveform snapshots available for a measurement point.
pub async fn list(client: &ApiClient, point: &PointArgs) -> Result<()> {
    let response = client
        .list_waves(&point.machine, &point.point, &point.pmode)
        .await?;

    let timestamps = listing::extract_timestamps(&response.items);
    if timestamps.is_empty() {
        // No data is a valid answer, not a failure.
        print_info("No wave snapshots found");
        return Ok(());
    }
    for ts in timestamps {
        println!("{ts}");
    }
    Ok(())
}

/// Fetch one waveform snapshot and export it to CSV.
pub async fn get(client: &ApiClient, point: &PointArgs, datetime: &str) -> Result<()> {
    let (epoch, series) = fetch_series(client, point, datetime).await?;

    let filename = snapshot_filename(point, epoch, "csv");
    export::write_csv(Path::new(&filename), &series)?;
    print_success(&format!("Data saved to {filename}"));
    Ok(())
}

/// Fetch one waveform snapshot and render it as a PNG chart.
pub async fn plot(client: &ApiClient, point: &PointArgs, datetime: &str) -> Result<()> {
    let (epoch, series) = fetch_series(client, point, datetime).await?;

    let title = format!(
        "Waveform - Machine: {}, Point: {}, Mode: {}",
        point.machine, point.point, point.pmode
    );
    let filename = snapshot_filename(point, epoch, "png");
    chart::render_png(Path::new(&filename), &title, &series)?;
    print_success(&format!("Chart saved to {filename}"));
    Ok(())
}

/// Shared fetch/decode/scale pipeline for `get` and `plot`.
async fn fetch_series(
    client: &ApiClient,
    point: &PointArgs,
    datetime: &str,
) -> Result<(i64, Series)> {
    let epoch = timestamp::parse_utc(datetime)?;
    let record = client
        .get_wave(&point.machine, &point.point, &point.pmode, epoch)
        .await?;

    let (sample_rate, factor, data) = record.into_parts()?;
    let samples = client.codec().decode(&data)?;
    let series = Series::time_domain(samples, sample_rate, factor)?;
    Ok((epoch, series))
}
