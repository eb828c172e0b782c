//! HTTP document fetcher with a fixed politeness delay
//!
//! Every request, the first one included, is preceded by the same sleep.
//! The delay does not adapt to response codes and nothing is retried.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use tracing::{debug, info};

use crate::domain::document::PageDocument;
use crate::domain::services::DocumentFetcher;
use crate::infrastructure::config::{defaults, CrawlingConfig};
use crate::infrastructure::crawl_error::{CrawlError, CrawlResult};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Sleep before every request
    pub crawl_delay: Duration,
}

impl HttpClientConfig {
    pub fn from_crawling_config(crawling: &CrawlingConfig) -> Self {
        Self {
            user_agent: crawling.user_agent.clone(),
            timeout_seconds: crawling.request_timeout_seconds,
            crawl_delay: crawling.crawl_delay(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            crawl_delay: Duration::from_secs(defaults::CRAWL_DELAY_SECONDS),
        }
    }
}

pub struct HttpDocumentFetcher {
    client: Client,
    config: HttpClientConfig,
    fetch_count: AtomicUsize,
}

impl HttpDocumentFetcher {
    pub fn new(config: HttpClientConfig) -> CrawlResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| CrawlError::fetch("<client setup>", format!("invalid user agent: {e}")))?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .map_err(|e| CrawlError::fetch("<client setup>", e))?;

        Ok(Self {
            client,
            config,
            fetch_count: AtomicUsize::new(0),
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Requests issued so far, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::Relaxed)
    }

    async fn get_text(&self, url: &str) -> CrawlResult<String> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CrawlError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::fetch(url, format!("HTTP status {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CrawlError::fetch(url, format!("failed to read response body: {e}")))?;

        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| CrawlError::fetch(url, format!("response body is not UTF-8: {e}")))?;

        debug!("Fetched {} ({} bytes)", url, text.len());
        Ok(text)
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str) -> CrawlResult<PageDocument> {
        if !self.config.crawl_delay.is_zero() {
            debug!("Waiting {:?} before fetching {}", self.config.crawl_delay, url);
            tokio::time::sleep(self.config.crawl_delay).await;
        }

        info!("Fetching URL: {}", url);
        let text = self.get_text(url).await?;
        Ok(PageDocument::parse(url, &text))
    }
}
