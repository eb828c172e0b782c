//! Field extraction for a single product tile
//!
//! Title, category and dimension come from fixed positions in the tile.
//! Price follows a two-branch policy: a standard price wins whenever one is
//! present; otherwise the tile must carry both a sale price and a discount
//! badge.

use tracing::debug;

use super::config::CatalogSelectors;
use crate::domain::document::{Lookup, Node, NodeQuery};
use crate::domain::product::{PriceTag, ProductRecord};
use crate::infrastructure::crawl_error::{CrawlError, CrawlResult};

pub struct ProductFieldExtractor {
    title_block: NodeQuery,
    category: NodeQuery,
    dimension: NodeQuery,
    standard_price: NodeQuery,
    discounted_price: NodeQuery,
    discount_label: NodeQuery,
    discount_prefix: String,
}

impl ProductFieldExtractor {
    pub fn new() -> CrawlResult<Self> {
        Self::with_config(&CatalogSelectors::default())
    }

    pub fn with_config(selectors: &CatalogSelectors) -> CrawlResult<Self> {
        Ok(Self {
            title_block: NodeQuery::parse(&selectors.title_block)?,
            category: NodeQuery::parse(&selectors.category)?,
            dimension: NodeQuery::parse(&selectors.dimension)?,
            standard_price: NodeQuery::parse(&selectors.standard_price)?,
            discounted_price: NodeQuery::parse(&selectors.discounted_price)?,
            discount_label: NodeQuery::parse(&selectors.discount_label)?,
            discount_prefix: selectors.discount_prefix.clone(),
        })
    }

    /// Extract every listing field of `product`. Reviews are left empty.
    pub fn extract(&self, product: &Node<'_>) -> CrawlResult<ProductRecord> {
        let tv_model = self.extract_title(product)?;
        let category = product.lookup_text(&self.category).require("category")?;
        let dimension = product.lookup_text(&self.dimension).require("dimension")?;
        let (price, price_tag) = self.extract_price(product)?;

        debug!("Extracted product '{}' ({:?})", tv_model, price_tag);

        Ok(ProductRecord {
            tv_model,
            category,
            dimension,
            price,
            price_tag,
            reviews: Vec::new(),
            brand: None,
            num_of_reviews: None,
        })
    }

    /// The title block starts with a decorative line; the model is line two.
    fn extract_title(&self, product: &Node<'_>) -> CrawlResult<String> {
        let block = product.lookup_text(&self.title_block).require("tv_model")?;
        block
            .split('\n')
            .nth(1)
            .map(str::to_string)
            .ok_or_else(|| CrawlError::missing_field("tv_model"))
    }

    fn extract_price(&self, product: &Node<'_>) -> CrawlResult<(String, PriceTag)> {
        if let Lookup::Found(text) = product.lookup_text(&self.standard_price) {
            return Ok((strip_line_breaks(&text), PriceTag::Standard));
        }

        let price = product.lookup_text(&self.discounted_price).require("price")?;
        let label = product
            .lookup_text(&self.discount_label)
            .require("discount_rate")?;
        let rate = label.replace(&self.discount_prefix, "");

        Ok((strip_line_breaks(&price), PriceTag::Discounted { rate }))
    }
}

fn strip_line_breaks(text: &str) -> String {
    text.replace('\n', "")
}
