// src/table/mod.rs

pub mod read;

pub use read::read_parquet;

use anyhow::{bail, Result};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

/// A fully materialized table: one schema and every decoded batch, in order.
///
/// Batches are kept as decoded rather than concatenated, so a string or
/// binary column larger than a single batch's 32-bit offsets can address
/// still loads.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Table {
    /// Collect decoded batches, in order, under `schema`.
    ///
    /// Every batch must carry the same fields as `schema`. Empty batches are
    /// dropped; an empty `batches` slice yields a zero-row table.
    pub fn from_batches(schema: SchemaRef, batches: &[RecordBatch]) -> Result<Self> {
        for (idx, batch) in batches.iter().enumerate() {
            if batch.schema().fields() != schema.fields() {
                bail!(
                    "record batch {} does not match table schema: {:?} vs {:?}",
                    idx,
                    batch.schema().fields(),
                    schema.fields()
                );
            }
        }
        let batches = batches
            .iter()
            .filter(|b| b.num_rows() > 0)
            .cloned()
            .collect();
        Ok(Self { schema, batches })
    }

    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }
}

impl From<RecordBatch> for Table {
    fn from(batch: RecordBatch) -> Self {
        Self {
            schema: batch.schema(),
            batches: vec![batch],
        }
    }
}
