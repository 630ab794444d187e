//! Logging initialization and configuration.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::config::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber based on configuration.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?;

    tracing_subscriber::registry()
        .with(build_layer(config)?)
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

/// Build the formatting layer for the configured format and output.
fn build_layer(
    config: &LoggingConfig,
) -> Result<Box<dyn Layer<Registry> + Send + Sync + 'static>, LoggingError> {
    let (writer, ansi) = make_writer(config)?;

    let layer = fmt::layer::<Registry>()
        .with_ansi(ansi)
        .with_target(config.target)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer);

    let layer = match (config.format, config.timestamps) {
        (LogFormat::Text, true) => layer.boxed(),
        (LogFormat::Text, false) => layer.without_time().boxed(),
        (LogFormat::Json, true) => layer.json().boxed(),
        (LogFormat::Json, false) => layer.json().without_time().boxed(),
    };

    Ok(layer)
}

/// Resolve the output target into a writer and whether ANSI colors apply.
fn make_writer(config: &LoggingConfig) -> Result<(BoxMakeWriter, bool), LoggingError> {
    let color = config.color && config.format == LogFormat::Text;

    match config.output.as_str() {
        "stdout" => Ok((
            BoxMakeWriter::new(io::stdout),
            color && io::stdout().is_terminal(),
        )),
        "stderr" => Ok((
            BoxMakeWriter::new(io::stderr),
            color && io::stderr().is_terminal(),
        )),
        path => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::FileOpen(path.to_string(), e))?;
            Ok((BoxMakeWriter::new(Arc::new(file)), false))
        }
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Invalid log filter string.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
    /// Failed to open log file.
    #[error("Failed to open log file '{0}': {1}")]
    FileOpen(String, #[source] io::Error),
    /// A global subscriber was already installed.
    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}
