use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file prefix.
pub const LOG_ENV_VAR: &str = "PRODUCT_CATALOG_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `PRODUCT_CATALOG_LOG` is set, since the
/// terminal UI owns stdout. Returns the file actually written to.
pub fn init_tracing() -> Option<PathBuf> {
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;
    let unique_path = unique_log_path(&log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", unique_path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

/// `{prefix}.{unix_seconds}.{pid}`, so concurrent instances never share a file.
fn unique_log_path(prefix: &str, pid: u32) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", prefix, timestamp, pid))
}
