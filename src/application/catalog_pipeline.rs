//! Catalog crawl orchestration
//!
//! root page → page count → page URLs → harvest each page in order →
//! derive brand / review counts over the whole record set.
//!
//! Everything runs one request at a time. The record accumulator is owned by
//! `run` and threaded through each page step by value.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::page_harvester::PageHarvester;
use crate::application::review_collector::ReviewCollector;
use crate::domain::pagination::PaginationPlanner;
use crate::domain::product::{derive_summary_fields, CatalogDataset, ProductRecord};
use crate::domain::services::{DatasetWriter, DocumentFetcher};
use crate::infrastructure::config::CrawlingConfig;
use crate::infrastructure::crawl_error::CrawlResult;
use crate::infrastructure::parsing::CatalogSelectors;

pub struct CatalogPipeline {
    fetcher: Arc<dyn DocumentFetcher>,
    planner: PaginationPlanner,
    harvester: PageHarvester,
    collect_reviews: bool,
}

impl CatalogPipeline {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        crawling: &CrawlingConfig,
        selectors: &CatalogSelectors,
    ) -> CrawlResult<Self> {
        let review_collector = ReviewCollector::new(fetcher.clone(), &crawling.site_origin, selectors)?;

        Ok(Self {
            planner: PaginationPlanner::new(&selectors.page_selector, &selectors.page_option)?,
            harvester: PageHarvester::new(selectors, review_collector)?,
            collect_reviews: crawling.collect_reviews,
            fetcher,
        })
    }

    pub fn collects_reviews(&self) -> bool {
        self.collect_reviews
    }

    /// Crawl the catalog rooted at `root_url`.
    ///
    /// A catalog with no products gives an empty dataset, not an error.
    pub async fn run(&self, root_url: &str) -> CrawlResult<CatalogDataset> {
        let page_count = {
            let root = self.fetcher.fetch(root_url).await?;
            self.planner.discover_page_count(&root)?
        };
        let page_urls = PaginationPlanner::build_page_urls(root_url, page_count);
        info!("Catalog {} has {} pages", root_url, page_count);

        let mut records = Vec::new();
        for (index, page_url) in page_urls.iter().enumerate() {
            records = self.harvest_into(records, page_url).await?;
            info!(
                "Page {}/{} done, {} products so far",
                index + 1,
                page_count,
                records.len()
            );
        }

        let records = derive_summary_fields(records, self.collect_reviews);
        Ok(CatalogDataset {
            records,
            reviews_collected: self.collect_reviews,
            pages_crawled: page_count,
        })
    }

    /// Run the crawl and hand the dataset to `writer`.
    pub async fn run_and_persist(
        &self,
        root_url: &str,
        writer: &mut dyn DatasetWriter,
    ) -> CrawlResult<CatalogDataset> {
        let dataset = self.run(root_url).await?;
        writer.write_dataset(&dataset)?;
        Ok(dataset)
    }

    async fn harvest_into(
        &self,
        mut accumulated: Vec<ProductRecord>,
        page_url: &str,
    ) -> CrawlResult<Vec<ProductRecord>> {
        let page = self.fetcher.fetch(page_url).await?;
        let page_records = self.harvester.harvest_page(&page, self.collect_reviews).await?;

        if page_records.is_empty() {
            warn!("No products found on {}", page_url);
        }

        accumulated.extend(page_records);
        Ok(accumulated)
    }
}
