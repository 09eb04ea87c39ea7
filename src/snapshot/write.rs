use anyhow::{Context, Result};
use arrow::ipc::writer::FileWriter;
use chrono::{SecondsFormat, Utc};
use std::{
    fs::{self, Permissions},
    io::{self, BufWriter, Write},
    path::Path,
};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, instrument};

use super::{SnapshotSummary, CREATED_AT_KEY, SOURCE_KEY};
use crate::table::Table;

/// Serialize `table` to `path` as an Arrow IPC file, replacing any existing file.
///
/// The file is written next to `path` under a temporary name and renamed
/// into place once the IPC footer is flushed and synced, so `path` only ever
/// holds a complete snapshot. A replaced file keeps its permissions; a new
/// one gets the same mode a plain create would. `source` is recorded in the
/// footer metadata.
#[instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display(), rows = table.num_rows()))]
pub fn write_snapshot<P: AsRef<Path>>(
    table: &Table,
    path: P,
    source: &str,
) -> Result<SnapshotSummary> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let existing = fs::metadata(path).ok().map(|m| m.permissions());
    let mut tmp = temp_file_in(dir, existing)
        .with_context(|| format!("creating temp snapshot in {:?}", dir))?;
    debug!(tmp = %tmp.path().display(), "writing snapshot");

    {
        let schema = table.schema();
        let mut writer = FileWriter::try_new(BufWriter::new(tmp.as_file_mut()), &schema)
            .context("creating Arrow IPC writer")?;
        writer.write_metadata(SOURCE_KEY, source);
        writer.write_metadata(CREATED_AT_KEY, created_at.clone());
        for (idx, batch) in table.batches().iter().enumerate() {
            writer
                .write(batch)
                .with_context(|| format!("writing snapshot batch {}", idx))?;
        }
        let mut sink = writer.into_inner().context("finishing Arrow IPC file")?;
        sink.flush().context("flushing snapshot")?;
    }
    tmp.as_file()
        .sync_all()
        .context("syncing snapshot to disk")?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("renaming snapshot into {:?}", path))?;

    let bytes = fs::metadata(path)
        .with_context(|| format!("stat {:?}", path))?
        .len();
    info!(bytes, "wrote snapshot");

    Ok(SnapshotSummary::new(
        path,
        table,
        bytes,
        Some(source.to_string()),
        Some(created_at),
    ))
}

/// Temp file in `dir` carrying `existing` permissions, or 0o666 under the umask.
fn temp_file_in(dir: &Path, existing: Option<Permissions>) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if existing.is_none() {
            builder.permissions(Permissions::from_mode(0o666));
        }
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    Ok(tmp)
}
