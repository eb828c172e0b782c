//! Shared fixtures for the integration tests: catalog markup builders and an
//! in-memory document fetcher.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use smart_tv_catalog_lib::infrastructure::CrawlingConfig;
use smart_tv_catalog_lib::{CrawlError, CrawlResult, DocumentFetcher, PageDocument};

pub const ORIGIN: &str = "https://shop.test";
pub const ROOT: &str = "https://shop.test/tv-e-audio/tv/smart-tv/";

/// Price markup variants seen on listing tiles
pub enum TilePrice<'a> {
    Standard(&'a str),
    Discounted { price: &'a str, label: &'a str },
    Missing,
}

pub fn tile(model: &str, href: &str, price: &TilePrice<'_>) -> String {
    let price_markup = match price {
        TilePrice::Standard(value) => {
            format!("<div class=\"sales text-center mb-3\">\n{value}\n</div>")
        }
        TilePrice::Discounted { price, label } => format!(
            "<span class=\"value font-bold text-nowrap h2\">\n{price}\n</span>\
             <small class=\"font-bold txt-light-blue discount text-center mt-auto mb-0 mr-3\">{label}</small>"
        ),
        TilePrice::Missing => String::new(),
    };

    format!(
        r#"<div class="col-md-3 col-sm-3 col-xs-6 product-layout grid-mode">
  <a href="{href}"><img src="/img/tv.jpg"></a>
  <div class="col-4 tile-body py-3">
{model}
    <p class="tile-category">Smart TV</p>
    <p class="body-medium mb-0">55"</p>
  </div>
  {price_markup}
</div>"#
    )
}

/// Listing page with a page selector of `page_count` options.
pub fn listing_page(page_count: usize, tiles: &[String]) -> String {
    let options: String = (1..=page_count)
        .map(|page| format!("<option value=\"{page}\">{page}</option>"))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html><body>
<select class="form-control change-pages">{options}</select>
<div class="row">{}</div>
</body></html>"#,
        tiles.join("\n")
    )
}

pub fn detail_page(reviews: &[&str]) -> String {
    let bodies: String = reviews
        .iter()
        .map(|review| format!("<div class=\"bv-content-summary-body-text\">{review}</div>"))
        .collect();
    format!("<html><body><h1>Detail</h1>{bodies}</body></html>")
}

pub fn crawling_config(collect_reviews: bool) -> CrawlingConfig {
    CrawlingConfig {
        root_url: ROOT.to_string(),
        site_origin: ORIGIN.to_string(),
        crawl_delay_seconds: 0,
        collect_reviews,
        ..Default::default()
    }
}

/// Serves canned HTML by URL and records every request in order.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> CrawlResult<PageDocument> {
        self.requests.lock().unwrap().push(url.to_string());
        let body = self
            .pages
            .get(url)
            .ok_or_else(|| CrawlError::fetch(url, "HTTP status 404 Not Found"))?;
        Ok(PageDocument::parse(url, body))
    }
}
