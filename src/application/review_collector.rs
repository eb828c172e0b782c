//! Review collection from product detail pages

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::domain::document::{Node, NodeQuery};
use crate::domain::services::DocumentFetcher;
use crate::infrastructure::crawl_error::{CrawlError, CrawlResult};
use crate::infrastructure::parsing::CatalogSelectors;

/// Follows a tile's link to its detail page and reads the review bodies.
pub struct ReviewCollector {
    fetcher: Arc<dyn DocumentFetcher>,
    site_origin: String,
    detail_link: NodeQuery,
    review_body: NodeQuery,
}

impl ReviewCollector {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        site_origin: &str,
        selectors: &CatalogSelectors,
    ) -> CrawlResult<Self> {
        Ok(Self {
            fetcher,
            site_origin: site_origin.to_string(),
            detail_link: NodeQuery::parse(&selectors.detail_link)?,
            review_body: NodeQuery::parse(&selectors.review_body)?,
        })
    }

    /// Absolute detail-page URL for `product`.
    pub fn detail_url(&self, product: &Node<'_>) -> CrawlResult<String> {
        let href = product
            .find_first(&self.detail_link)
            .and_then(|link| link.attr("href"))
            .ok_or_else(|| CrawlError::missing_field("detail_link"))?;
        resolve_detail_url(&self.site_origin, href)
    }

    /// Review texts in document order; empty when the page has none.
    pub async fn collect_reviews(&self, product: &Node<'_>) -> CrawlResult<Vec<String>> {
        let url = self.detail_url(product)?;
        let detail = self.fetcher.fetch(&url).await?;

        let reviews: Vec<String> = detail
            .find_all(&self.review_body)
            .iter()
            .map(Node::text)
            .collect();

        debug!("Collected {} reviews from {}", reviews.len(), url);
        Ok(reviews)
    }
}

/// Join a tile href onto the site origin with exactly one `/` between them.
/// Absolute hrefs are kept as they are.
pub fn resolve_detail_url(site_origin: &str, href: &str) -> CrawlResult<String> {
    let resolved = if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!(
            "{}/{}",
            site_origin.trim_end_matches('/'),
            href.trim_start_matches('/')
        )
    };

    Url::parse(&resolved).map_err(|e| CrawlError::parse(&resolved, format!("invalid detail URL: {e}")))?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.euronics.it", "tv/samsung-qe55.html", "https://www.euronics.it/tv/samsung-qe55.html")]
    #[case("https://www.euronics.it/", "/tv/lg-43ur.html", "https://www.euronics.it/tv/lg-43ur.html")]
    #[case("https://www.euronics.it", "https://cdn.example.com/p/1", "https://cdn.example.com/p/1")]
    fn test_resolve_detail_url(#[case] origin: &str, #[case] href: &str, #[case] expected: &str) {
        assert_eq!(resolve_detail_url(origin, href).unwrap(), expected);
    }

    #[test]
    fn test_unusable_origin_is_parse_error() {
        let err = resolve_detail_url("not a url", "tv/1.html").unwrap_err();
        assert!(matches!(err, CrawlError::Parse { .. }));
    }
}
