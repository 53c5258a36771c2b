use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "food-dashboard.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Build the level filter: `RUST_LOG` when set, otherwise the configured level
/// for this crate and `warn` for everything else.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,food_dashboard={}", level)))
}

/// Subscriber writing to a daily rolling file in `log_dir` through a
/// non-blocking worker. Lines are flushed when the guard drops.
fn file_subscriber(
    log_dir: &Path,
    level: &str,
) -> std::io::Result<(impl tracing::Subscriber + Send + Sync + 'static, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(file_layer);
    Ok((subscriber, guard))
}

/// Send logs to a daily rolling file. The terminal belongs to the UI, so
/// nothing is written to stdout/stderr.
///
/// Keep the returned guard alive for the whole run and let it drop normally
/// (no `process::exit`), or buffered lines are lost.
pub fn init(log_dir: &Path, level: &str) -> std::io::Result<WorkerGuard> {
    let (subscriber, guard) = file_subscriber(log_dir, level)?;
    subscriber.init();
    Ok(guard)
}
