//! Subcommand implementations, split by resource

pub mod spectra;
pub mod waves;

use crate::PointArgs;

/// Output filename for one snapshot: `{machine}_{point}_{pmode}_{epoch}.{ext}`.
pub fn snapshot_filename(point: &PointArgs, epoch: i64, ext: &str) -> String {
    format!(
        "{}_{}_{}_{}.{ext}",
        point.machine, point.point, point.pmode, epoch
    )
}
