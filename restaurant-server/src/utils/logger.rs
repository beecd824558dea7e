//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies to this
//! crate, `tower_http` and the `security` target.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::core::config::LoggingConfig;

/// Initialize the global subscriber.
///
/// Returns the appender guard when logging to a file; dropping it flushes and
/// stops the background writer.
pub fn init_logger(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "restaurant_server={0},tower_http={0},security={0}",
            config.level
        ))
    });

    let (writer, guard) = match config.dir.as_deref().and_then(prepare_log_dir) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "restaurant-server");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }

    guard
}

fn prepare_log_dir(dir: &str) -> Option<&str> {
    match std::fs::create_dir_all(Path::new(dir)) {
        Ok(()) => Some(dir),
        Err(e) => {
            eprintln!("Cannot use log directory {dir}: {e}, logging to stdout");
            None
        }
    }
}
