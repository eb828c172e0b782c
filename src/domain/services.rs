//! Collaborator interfaces used by the catalog pipeline
//!
//! The transport and the tabular writer sit behind these traits so the
//! crawl logic can run against fixtures.

use async_trait::async_trait;

use crate::domain::document::PageDocument;
use crate::domain::product::CatalogDataset;
use crate::infrastructure::crawl_error::CrawlResult;

/// Fetches a URL and returns its parsed document.
///
/// Implementations wait the configured crawl delay before every request.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> CrawlResult<PageDocument>;
}

/// Persists a finished dataset.
pub trait DatasetWriter {
    fn write_dataset(&mut self, dataset: &CatalogDataset) -> CrawlResult<()>;
}
