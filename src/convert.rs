use anyhow::Result;
use std::time::Instant;
use tracing::{info, instrument};

use crate::config::Config;
use crate::snapshot::{write_snapshot, SnapshotSummary};
use crate::table::read_parquet;

/// Load `cfg.input` fully into memory and snapshot it to `cfg.output`.
///
/// The input is read completely before the output is touched, so a missing
/// or unreadable input leaves no output file behind.
#[instrument(level = "info", skip(cfg), fields(input = %cfg.input.display(), output = %cfg.output.display()))]
pub fn convert_and_snapshot(cfg: &Config) -> Result<SnapshotSummary> {
    let start = Instant::now();

    let table = read_parquet(&cfg.input, cfg.batch_size)?;
    let summary = write_snapshot(&table, &cfg.output, &cfg.input.display().to_string())?;

    info!(
        rows = summary.rows,
        columns = summary.num_columns(),
        bytes = summary.bytes,
        elapsed = ?start.elapsed(),
        "snapshot complete"
    );
    Ok(summary)
}
