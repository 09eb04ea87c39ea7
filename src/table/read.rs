use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::{fs::File, path::Path};
use tracing::{debug, info, instrument};

use super::Table;

/// Load an entire Parquet file into memory.
///
/// Every row group is decoded and the batches kept in file order. Columns are
/// carried through as the Arrow reader decodes them: nothing is projected,
/// filtered or coerced. A pandas index stored as `__index_level_0__` stays an
/// ordinary column; the `pandas` schema metadata is kept but not interpreted.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_parquet<P: AsRef<Path>>(path: P, batch_size: usize) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening parquet file {:?}", path))?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("reading parquet metadata from {:?}", path))?;
    let schema = builder.schema().clone();
    debug!(
        row_groups = builder.metadata().num_row_groups(),
        rows = builder.metadata().file_metadata().num_rows(),
        "parquet metadata"
    );

    let reader = builder
        .with_batch_size(batch_size)
        .build()
        .with_context(|| format!("building record batch reader for {:?}", path))?;

    let batches: Vec<RecordBatch> = reader
        .collect::<Result<_, _>>()
        .with_context(|| format!("decoding record batches from {:?}", path))?;

    let table = Table::from_batches(schema, &batches)?;
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        batches = batches.len(),
        "loaded parquet"
    );
    Ok(table)
}
