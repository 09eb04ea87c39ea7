use anyhow::Result;
use parquet_snapshot::{read_snapshot, Config};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::exit,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Optional single argument: path to a snapshot file.
    let args: Vec<String> = env::args().collect();
    let path = match args.len() {
        1 => Config::default().output,
        2 => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: {} [SNAPSHOT_FILE]", args[0]);
            exit(1);
        }
    };

    if let Err(e) = inspect_snapshot(&path) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// Read the snapshot and print its summary as JSON.
fn inspect_snapshot(path: &Path) -> Result<()> {
    let snap = read_snapshot(path)?;
    let bytes = fs::metadata(path)?.len();
    let summary = snap.summary(path, bytes);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
