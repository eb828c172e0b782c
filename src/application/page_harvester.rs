//! Harvesting every product tile of one listing page
//!
//! Fail-fast: a tile that cannot be extracted aborts the whole page, since a
//! broken field almost always means the listing markup changed.

use tracing::{debug, error};

use crate::application::review_collector::ReviewCollector;
use crate::domain::document::{NodeQuery, PageDocument};
use crate::domain::product::ProductRecord;
use crate::infrastructure::crawl_error::CrawlResult;
use crate::infrastructure::parsing::{CatalogSelectors, ProductFieldExtractor};

pub struct PageHarvester {
    product_container: NodeQuery,
    extractor: ProductFieldExtractor,
    review_collector: ReviewCollector,
}

impl PageHarvester {
    pub fn new(selectors: &CatalogSelectors, review_collector: ReviewCollector) -> CrawlResult<Self> {
        Ok(Self {
            product_container: NodeQuery::parse(&selectors.product_container)?,
            extractor: ProductFieldExtractor::with_config(selectors)?,
            review_collector,
        })
    }

    /// Records for every tile on `page`, in document order.
    pub async fn harvest_page(
        &self,
        page: &PageDocument,
        collect_reviews: bool,
    ) -> CrawlResult<Vec<ProductRecord>> {
        let products = page.find_all(&self.product_container);
        debug!("Found {} product containers on {}", products.len(), page.url());

        let mut records = Vec::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            let record = self.extractor.extract(product).inspect_err(|e| {
                error!("Failed to extract product {} on {}: {}", index, page.url(), e);
            })?;

            let record = if collect_reviews {
                let reviews = self.review_collector.collect_reviews(product).await?;
                record.with_reviews(reviews)
            } else {
                record
            };

            records.push(record);
        }

        Ok(records)
    }
}
