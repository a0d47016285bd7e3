use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Log file from [`LoggingConfig::file_path`]. Used while the terminal UI
    /// owns the screen.
    File,
    Stderr,
}

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence over the configured filter. If the log file
/// cannot be created, logging stays disabled rather than writing over the UI.
pub fn init_tracing(config: &LoggingConfig, sink: LogSink) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.as_str()));
    let timer = fmt::time::UtcTime::rfc_3339();

    match sink {
        LogSink::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(timer)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogSink::File => {
            let path = config.file_path();
            let file = match open_log_file(&path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("Warning: Failed to open log file {}: {}", path.display(), err);
                    return;
                }
            };

            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_timer(timer)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
