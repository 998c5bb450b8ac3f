use anyhow::{Context, Result};
use std::env;
use svd_lab_data::{load_data_from, DatasetConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) resolve dataset location ─────────────────────────────────
    let config = match env::args_os().nth(1) {
        Some(path) => DatasetConfig::from_path(path)?,
        None => DatasetConfig::default(),
    };
    let location = config
        .location()
        .context("resolving default data directory")?;

    // ─── 3) load ─────────────────────────────────────────────────────
    let table = load_data_from(&location)
        .with_context(|| format!("loading dataset from {}", location.data_dir.display()))?;

    let (rows, cols) = table.shape();
    info!(rows, cols, "loaded table");
    for (name, ty) in table.columns().iter().zip(table.column_types()) {
        info!(column = %name, ty = ?ty, "column");
    }

    Ok(())
}
