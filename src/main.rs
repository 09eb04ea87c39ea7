use anyhow::Result;
use parquet_snapshot::{convert_and_snapshot, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,parquet_snapshot=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) fixed paths ──────────────────────────────────────────────
    let cfg = Config::default();

    // ─── 3) read → materialize → snapshot ────────────────────────────
    let summary = convert_and_snapshot(&cfg)?;
    info!(
        output = %summary.path,
        rows = summary.rows,
        columns = summary.num_columns(),
        "done"
    );
    Ok(())
}
