//! Logging Infrastructure
//!
//! Structured logging setup: env filter, optional JSON lines, optional daily
//! rolling file output.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this more than once
/// is harmless; only the first subscriber is installed.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        match std::fs::create_dir_all(log_path) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(log_path, "employee-server");
                let _ = if json {
                    subscriber.json().with_writer(file_appender).try_init()
                } else {
                    subscriber
                        .with_ansi(false)
                        .with_writer(file_appender)
                        .try_init()
                };
                return;
            }
            Err(e) => {
                eprintln!("Cannot create log directory {}: {}, logging to stdout", dir, e);
            }
        }
    }

    let _ = if json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}
