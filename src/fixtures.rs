// Parquet fixtures shared by the unit tests.

use anyhow::Result;
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray, TimestampMicrosecondArray};
use arrow::compute::concat_batches;
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{fs::File, path::Path, sync::Arc};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::table::Table;

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,parquet_snapshot=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn candle_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(
            "open_time",
            DataType::Timestamp(TimeUnit::Microsecond, None),
            false,
        ),
        Field::new("symbol", DataType::Utf8, false),
        Field::new("close", DataType::Float64, false),
        Field::new("volume", DataType::Float64, true),
        Field::new("trades", DataType::Int64, true),
    ]))
}

/// `rows` candles; every third row has null `volume` and `trades`.
pub fn candles(rows: usize, offset: i64) -> RecordBatch {
    let open_time: Vec<i64> = (0..rows as i64)
        .map(|i| 1_700_000_000_000_000 + (offset + i) * 60_000_000)
        .collect();
    let symbol: Vec<&str> = vec!["BTC-USDT"; rows];
    let close: Vec<f64> = (0..rows).map(|i| 37_000.5 + offset as f64 + i as f64).collect();
    let volume: Vec<Option<f64>> = (0..rows)
        .map(|i| if i % 3 == 2 { None } else { Some(1.25 * i as f64) })
        .collect();
    let trades: Vec<Option<i64>> = (0..rows as i64)
        .map(|i| if i % 3 == 2 { None } else { Some(offset + i * 7) })
        .collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(TimestampMicrosecondArray::from(open_time)),
        Arc::new(StringArray::from(symbol)),
        Arc::new(Float64Array::from(close)),
        Arc::new(Float64Array::from(volume)),
        Arc::new(Int64Array::from(trades)),
    ];
    RecordBatch::try_new(candle_schema(), columns).expect("fixture batch")
}

/// Write `batch` to `path`, splitting it into row groups of at most `row_group_size` rows.
pub fn write_parquet(path: &Path, batch: &RecordBatch, row_group_size: usize) -> Result<()> {
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .set_max_row_group_size(row_group_size)
        .build();
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

/// Every row of `table` as one batch, for comparing against a source batch.
pub fn concat(table: &Table) -> RecordBatch {
    concat_batches(&table.schema(), table.batches()).expect("concat table batches")
}
