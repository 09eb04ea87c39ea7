use anyhow::{Context, Result};
use arrow::ipc::reader::FileReader;
use arrow::record_batch::RecordBatch;
use std::{fs::File, io::BufReader, path::Path};
use tracing::{debug, instrument};

use super::Snapshot;
use crate::table::Table;

/// Deserialize an Arrow IPC snapshot back into a [`Table`].
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening snapshot {:?}", path))?;
    let reader = FileReader::try_new(BufReader::new(file), None)
        .with_context(|| format!("reading Arrow IPC footer of {:?}", path))?;

    let schema = reader.schema();
    let metadata = reader.custom_metadata().clone();
    let batches: Vec<RecordBatch> = reader
        .collect::<Result<_, _>>()
        .with_context(|| format!("decoding snapshot batches from {:?}", path))?;
    debug!(batches = batches.len(), "read snapshot");

    let table = Table::from_batches(schema, &batches)?;
    Ok(Snapshot { table, metadata })
}
