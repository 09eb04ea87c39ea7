// src/snapshot/mod.rs

pub mod read;
pub mod write;

pub use read::read_snapshot;
pub use write::write_snapshot;

use serde::Serialize;
use std::{collections::HashMap, path::Path};

use crate::table::Table;

/// Footer metadata key holding the input path the snapshot was taken from.
pub const SOURCE_KEY: &str = "snapshot.source";
/// Footer metadata key holding the RFC 3339 UTC time the snapshot was written.
pub const CREATED_AT_KEY: &str = "snapshot.created_at";

/// A snapshot read back from disk.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub table: Table,
    /// IPC footer custom metadata, including [`SOURCE_KEY`] and [`CREATED_AT_KEY`].
    pub metadata: HashMap<String, String>,
}

impl Snapshot {
    pub fn source(&self) -> Option<&str> {
        self.metadata.get(SOURCE_KEY).map(String::as_str)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.metadata.get(CREATED_AT_KEY).map(String::as_str)
    }

    pub fn summary(&self, path: &Path, bytes: u64) -> SnapshotSummary {
        SnapshotSummary::new(
            path,
            &self.table,
            bytes,
            self.source().map(str::to_string),
            self.created_at().map(str::to_string),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

/// Report of a written or inspected snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub path: String,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    pub bytes: u64,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

impl SnapshotSummary {
    fn new(
        path: &Path,
        table: &Table,
        bytes: u64,
        source: Option<String>,
        created_at: Option<String>,
    ) -> Self {
        let columns = table
            .schema()
            .fields()
            .iter()
            .map(|f| ColumnSummary {
                name: f.name().clone(),
                data_type: f.data_type().to_string(),
                nullable: f.is_nullable(),
            })
            .collect();
        Self {
            path: path.display().to_string(),
            rows: table.num_rows(),
            columns,
            bytes,
            source,
            created_at,
        }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
