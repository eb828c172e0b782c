//! Logging system configuration and initialization
//!
//! - Console output and an optional log file, each toggled by config
//! - Optional JSON formatting
//! - `RUST_LOG` overrides the configured level
//! - Local time stamps

#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use chrono::Local;
use lazy_static::lazy_static;
use tracing::info;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    filter::Directive,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

// Keeps the non-blocking file writer alive for the life of the process
lazy_static! {
    static ref LOG_GUARDS: Mutex<Vec<tracing_appender::non_blocking::WorkerGuard>> = Mutex::new(Vec::new());
}

/// Dependency targets that are clamped unless TRACE is requested
const NOISY_TARGETS: &[(&str, &str)] = &[
    ("reqwest", "info"),
    ("hyper", "warn"),
    ("hyper_util", "warn"),
    ("h2", "warn"),
    ("html5ever", "warn"),
    ("selectors", "warn"),
];

struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Get the log directory relative to the executable location
pub fn get_log_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Build the level filter: `RUST_LOG` when set, otherwise the configured level
/// with noisy dependency targets clamped.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(&config.level)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", config.level, e))?;

    if !config.level.to_lowercase().contains("trace") {
        for (target, level) in NOISY_TARGETS {
            let directive = format!("{}={}", target, level)
                .parse::<Directive>()
                .map_err(|e| anyhow!("Invalid log directive for {}: {}", target, e))?;
            filter = filter.add_directive(directive);
        }
    }

    Ok(filter)
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(config)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.file_output {
        let log_dir = config.log_dir.clone().unwrap_or_else(get_log_directory);
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", log_dir, e))?;

        let file_appender = rolling::never(&log_dir, &config.log_file_name);
        let (file_writer, file_guard) = non_blocking(file_appender);
        LOG_GUARDS
            .lock()
            .map_err(|_| anyhow!("Log guard registry poisoned"))?
            .push(file_guard);

        let file_layer = fmt::Layer::new()
            .with_writer(file_writer)
            .with_timer(LocalTimeFormatter)
            .with_ansi(false);
        if config.json_format {
            layers.push(file_layer.json().with_target(true).boxed());
        } else {
            layers.push(file_layer.with_target(false).boxed());
        }
    }

    if config.console_output {
        let console_layer = fmt::Layer::new()
            .with_writer(std::io::stdout)
            .with_timer(LocalTimeFormatter)
            .with_target(false);
        if config.json_format {
            layers.push(console_layer.json().boxed());
        } else {
            layers.push(console_layer.boxed());
        }
    }

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    info!(
        "Logging initialized (level: {}, console: {}, file: {})",
        config.level, config.console_output, config.file_output
    );
    Ok(())
}
