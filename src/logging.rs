//! provides logging helpers

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::{prelude::*, registry};

const LOG_FILE_PREFIX: &str = "pod-query.log";

/// Install the global tracing subscriber.
///
/// Always logs to stdout; with `log_dir` also writes daily rolling files there.
/// Keep the returned guard alive until shutdown so buffered lines get flushed.
pub fn init(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = || {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    };

    let stdout_layer = layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_filter(env_filter());

    match log_dir {
        Some(dir) => {
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender(dir)?);
            let file_layer = layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(env_filter());

            registry().with(stdout_layer).with(file_layer).init();
            Ok(Some(guard))
        }
        None => {
            registry().with(stdout_layer).init();
            Ok(None)
        }
    }
}

/// Daily rolling appender in `dir`; fails if the directory cannot be created.
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
        .with_context(|| format!("failed to open log directory {}", dir.display()))
}
