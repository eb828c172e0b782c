//! Infrastructure layer: HTTP transport, HTML extraction, configuration,
//! logging, error types and CSV export.

pub mod config;
pub mod crawl_error;
pub mod dataset_writer;
pub mod http_client;
pub mod logging;
pub mod parsing;

pub use config::{AppConfig, ConfigManager, CrawlingConfig, LoggingConfig, OutputConfig};
pub use crawl_error::{CrawlError, CrawlResult};
pub use dataset_writer::CsvDatasetWriter;
pub use http_client::{HttpClientConfig, HttpDocumentFetcher};
pub use parsing::{CatalogSelectors, ProductFieldExtractor};
