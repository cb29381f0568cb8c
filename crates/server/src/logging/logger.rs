// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::SERVICE_NAME;
use config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse Loki URL '{url}': {source}")]
    InvalidLokiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to configure Loki integration: {0}")]
    LokiError(#[from] tracing_loki::Error),

    #[error("Failed to install global subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
    pub loki_url: Option<&'a str>,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
            write_to_file: config.write,
            write_path: &config.write_path,
            write_max_file_size: config.write_max_file_size,
            write_max_files: config.write_max_files,
            loki_url: config.loki_url.as_deref(),
        }
    }
}

/// Build the filter for a configured level.
///
/// `http` is not a tracing level: it means `info` plus the access log, which
/// is emitted at debug under the `http` target.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = if level == "http" { "info,http=debug" } else { level };

    EnvFilter::try_new(directives).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize the global tracing subscriber.
///
/// Console output is always enabled. Optionally adds:
/// - a size-rotated file under `write_path` (`logs.log`, `logs.log.1`, ...),
///   keeping `write_max_files` files including the current one
/// - a Loki layer shipping logs to `loki_url`, labelled with the service name
///
/// Must be called from within a tokio runtime when Loki is enabled.
pub fn init(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config.level)?;

    let mut layers: Vec<BoxedLayer> = vec![console_layer(config.json_format, config.strip_ansi)];

    if config.write_to_file {
        layers.push(file_layer(
            config.write_path,
            config.write_max_file_size,
            config.write_max_files,
            config.json_format,
        )?);
    }

    if let Some(url) = config.loki_url {
        layers.push(loki_layer(url)?);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(())
}

fn console_layer(json_format: bool, strip_ansi: bool) -> BoxedLayer {
    if json_format {
        return fmt::layer().json().boxed();
    }

    fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(!strip_ansi)
        .boxed()
}

fn file_layer(
    write_path: &str,
    max_file_size: u64,
    max_files: usize,
    json_format: bool,
) -> Result<BoxedLayer, LoggingError> {
    std::fs::create_dir_all(write_path)?;

    let log_file_path = PathBuf::from(write_path).join("logs.log");
    // max_files counts the live file, the appender only counts rotated ones
    let file_appender = BasicRollingFileAppender::new(
        log_file_path,
        RollingConditionBasic::new().max_size(max_file_size),
        max_files.saturating_sub(1),
    )?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    // The writer thread must outlive every log call.
    std::mem::forget(guard);

    let layer = if json_format {
        fmt::layer().json().with_writer(non_blocking).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(non_blocking)
            .boxed()
    };

    Ok(layer)
}

fn loki_layer(url: &str) -> Result<BoxedLayer, LoggingError> {
    let parsed_url = url::Url::parse(url).map_err(|source| LoggingError::InvalidLokiUrl {
        url: url.to_string(),
        source,
    })?;

    let (layer, task) = tracing_loki::builder()
        .label("service", SERVICE_NAME)?
        .extra_field("pid", format!("{}", std::process::id()))?
        .build_url(parsed_url)?;

    tokio::spawn(task);

    Ok(layer.boxed())
}
