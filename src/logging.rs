//! File logging into the logs directory.
//!
//! The console is reserved for the conversation, so `tracing` output only
//! goes to `<logs_dir>/omneuro.log`. Verbosity comes from `OMNEURO_LOG`
//! (`EnvFilter` syntax) and defaults to `info`.

use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::errors::OmneuroError;

pub const LOG_FILE: &str = "omneuro.log";
pub const LOG_ENV_VAR: &str = "OMNEURO_LOG";

/// Install the global subscriber. Keep the guard alive until exit so buffered
/// lines are flushed.
pub fn init(logs_dir: &Path) -> Result<WorkerGuard, OmneuroError> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(logs_dir)
        .map_err(|e| OmneuroError::Logging(e.to_string()))?;
    let (non_blocking, guard) = NonBlocking::new(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    Registry::default()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| OmneuroError::Logging(e.to_string()))?;

    Ok(guard)
}
