use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "GLOSSA_LOG";

/// Keeps the background log writer alive; drop it last.
pub struct LogGuard {
    _guard: WorkerGuard,
}

pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glossa")
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs go to a file: the terminal UI owns stdout.
pub fn init(default_level: &str) -> Option<LogGuard> {
    let dir = log_dir();
    if let Err(err) = fs::create_dir_all(&dir) {
        eprintln!("failed to create log directory {}: {err}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, "glossa.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(file_layer)
        .try_init();
    if installed.is_err() {
        return None;
    }

    Some(LogGuard { _guard: guard })
}
