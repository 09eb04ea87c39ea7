pub mod config;
pub mod convert;
pub mod snapshot;
pub mod table;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::Config;
pub use convert::convert_and_snapshot;
pub use snapshot::{read_snapshot, write_snapshot, Snapshot, SnapshotSummary};
pub use table::{read_parquet, Table};
