//! Smart TV catalog crawler
//!
//! Walks a paginated e-commerce listing one request at a time, extracts a
//! record per product tile (price with a discount fallback, optional reviews
//! from the detail page) and exports the result as CSV.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CatalogPipeline;
pub use domain::{CatalogDataset, DocumentFetcher, PageDocument, ProductRecord};
pub use infrastructure::{AppConfig, CrawlError, CrawlResult, CsvDatasetWriter, HttpDocumentFetcher};
