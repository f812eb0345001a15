use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::core::config::{AppPaths, LoggingConfig};

const LOG_FILE_NAME: &str = "server.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `logging.level`. The rolling file under the data
/// directory's `logs/` is plain text even when stdout is JSON.
pub fn init(paths: &AppPaths, config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = if config.file {
        let _ = std::fs::create_dir_all(&paths.log_dir);
        let file_appender = tracing_appender::rolling::daily(&paths.log_dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = LOG_GUARD.set(guard);

        Some(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
    } else {
        None
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}
