//! Pagination planning for the catalog listing.
//!
//! - page count comes from the page-selector control on the root page
//! - page 1 is the bare root URL, page k > 1 is `root?p=k`

use tracing::debug;

use crate::domain::document::{NodeQuery, PageDocument};
use crate::infrastructure::crawl_error::{CrawlError, CrawlResult};

#[derive(Debug, Clone)]
pub struct PaginationPlanner {
    page_selector: NodeQuery,
    option: NodeQuery,
}

impl PaginationPlanner {
    pub fn new(page_selector: &str, option: &str) -> CrawlResult<Self> {
        Ok(Self {
            page_selector: NodeQuery::parse(page_selector)?,
            option: NodeQuery::parse(option)?,
        })
    }

    /// Number of options in the page-selector control.
    ///
    /// A missing control is a `Structure` error, never "one page".
    pub fn discover_page_count(&self, root: &PageDocument) -> CrawlResult<usize> {
        let control = root
            .find_first(&self.page_selector)
            .ok_or_else(|| CrawlError::structure(self.page_selector.as_str()))?;
        let count = control.find_all(&self.option).len();
        debug!("Page selector on {} lists {} pages", root.url(), count);
        Ok(count)
    }

    pub fn build_page_urls(root_url: &str, page_count: usize) -> Vec<String> {
        (1..=page_count)
            .map(|page| {
                if page == 1 {
                    root_url.to_string()
                } else {
                    format!("{root_url}?p={page}")
                }
            })
            .collect()
    }
}
