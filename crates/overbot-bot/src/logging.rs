//! Tracing subscriber setup.

use crate::error::{BotError, BotResult};
use overbot_config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log file name prefix inside the configured directory.
pub const LOG_FILE_PREFIX: &str = "overbot.log";

/// Builds the filter: `RUST_LOG` when given, else the configured level.
pub fn build_filter(rust_log: Option<&str>, level: &str) -> BotResult<EnvFilter> {
    let directives = rust_log.filter(|value| !value.trim().is_empty()).unwrap_or(level);
    EnvFilter::try_new(directives).map_err(|e| BotError::Logging(format!("{directives}: {e}")))
}

/// Installs the global subscriber.
///
/// Logs go to stdout, and also to a daily-rolling file when a directory
/// is configured. The returned guard flushes the file writer and must be
/// kept alive until shutdown.
pub fn init_logging(config: &LoggingConfig) -> BotResult<Option<WorkerGuard>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), &config.level)?;

    let (file, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json())
            .with(file.map(|writer| fmt::layer().json().with_writer(writer)))
            .try_init()
    } else {
        registry
            .with(fmt::layer())
            .with(file.map(|writer| fmt::layer().with_ansi(false).with_writer(writer)))
            .try_init()
    };
    result.map_err(|e| BotError::Logging(e.to_string()))?;

    Ok(guard)
}
