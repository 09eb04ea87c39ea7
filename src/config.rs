use std::path::PathBuf;

/// Parquet file read on every run, relative to the working directory.
pub const DEFAULT_INPUT: &str = "BTC-USDT.parquet";
/// Snapshot written on every run, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "X_tr.arrow";
/// Rows per decoded batch while reading; batches are concatenated afterwards.
pub const DEFAULT_BATCH_SIZE: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Same paths resolved under `dir` instead of the working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            input: dir.join(DEFAULT_INPUT),
            output: dir.join(DEFAULT_OUTPUT),
            ..Self::default()
        }
    }
}
