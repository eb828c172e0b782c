//! Configuration infrastructure
//!
//! Settings are layered: built-in defaults, then an optional config file,
//! then `SMART_TV__<SECTION>__<KEY>` environment variables. The binary applies
//! command-line overrides on top.

#![allow(clippy::derivable_impls)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::infrastructure::parsing::CatalogSelectors;

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub crawling: CrawlingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub selectors: CatalogSelectors,
}

/// Crawl target and politeness settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlingConfig {
    /// Catalog listing root; page k > 1 is `root_url?p=k`
    pub root_url: String,

    /// Origin that product links are joined against
    pub site_origin: String,

    /// Seconds to wait before every request
    pub crawl_delay_seconds: u64,

    /// Visit each product's detail page for its reviews
    pub collect_reviews: bool,

    pub user_agent: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl CrawlingConfig {
    pub fn crawl_delay(&self) -> Duration {
        Duration::from_secs(self.crawl_delay_seconds)
    }
}

/// Where the dataset goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub csv_path: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for the log file; defaults to `logs/` next to the executable
    pub log_dir: Option<PathBuf>,

    pub log_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            crawling: CrawlingConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            selectors: CatalogSelectors::default(),
        }
    }
}

impl Default for CrawlingConfig {
    fn default() -> Self {
        Self {
            root_url: euronics::SMART_TV_CATALOG.to_string(),
            site_origin: euronics::BASE_URL.to_string(),
            crawl_delay_seconds: defaults::CRAWL_DELAY_SECONDS,
            collect_reviews: defaults::COLLECT_REVIEWS,
            user_agent: defaults::USER_AGENT.to_string(),
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(defaults::CSV_FILE_NAME),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            log_dir: None,
            log_file_name: defaults::LOG_FILE_NAME.to_string(),
        }
    }
}

/// Configuration loader
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    pub const ENV_PREFIX: &'static str = "SMART_TV";

    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join("smart-tv-catalog");
        Ok(config_dir)
    }

    /// Use `path` if given, else `<config dir>/smart-tv-catalog/config.{toml,json,...}`.
    pub fn new(path: Option<PathBuf>) -> Self {
        let config_path = path.or_else(|| Self::get_config_dir().ok().map(|dir| dir.join("config")));
        Self { config_path }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        let defaults = Config::try_from(&AppConfig::default())
            .context("Failed to serialize default configuration")?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = &self.config_path {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

/// Euronics catalog URLs
pub mod euronics {
    /// Site origin that relative product links are joined to
    pub const BASE_URL: &str = "https://www.euronics.it";

    /// Smart TV listing root
    pub const SMART_TV_CATALOG: &str = "https://www.euronics.it/tv-e-audio/tv/smart-tv/";
}

/// Default configuration values
pub mod defaults {
    /// Default wait before every request, in seconds
    pub const CRAWL_DELAY_SECONDS: u64 = 5;

    /// Default review collection setting
    pub const COLLECT_REVIEWS: bool = true;

    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    pub const USER_AGENT: &str = "smart-tv-catalog/0.1 (catalog research crawler)";

    /// Default output file
    pub const CSV_FILE_NAME: &str = "euronics_smart_tvs.csv";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;
    pub const LOG_FILE_NAME: &str = "smart-tv-catalog.log";
}
