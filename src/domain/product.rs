/// Which price branch produced a record's price.
///
/// Encodes the "discounted iff discount rate present" rule in the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceTag {
    Standard,
    Discounted { rate: String },
}

/// One smart TV from the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub tv_model: String,
    pub category: String,
    pub dimension: String,
    pub price: String,
    pub price_tag: PriceTag,
    pub reviews: Vec<String>,
    /// Filled in once all pages are harvested.
    pub brand: Option<String>,
    /// Filled in once all pages are harvested, and only when reviews were collected.
    pub num_of_reviews: Option<usize>,
}

impl ProductRecord {
    pub fn discounted(&self) -> bool {
        matches!(self.price_tag, PriceTag::Discounted { .. })
    }

    pub fn discount_rate(&self) -> Option<&str> {
        match &self.price_tag {
            PriceTag::Discounted { rate } => Some(rate),
            PriceTag::Standard => None,
        }
    }

    /// Attach reviews harvested from the detail page.
    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<String>) -> Self {
        self.reviews = reviews;
        self
    }
}

/// Brand is everything before the first `-` of the model title, untrimmed.
pub fn brand_of(tv_model: &str) -> &str {
    tv_model.split('-').next().unwrap_or(tv_model)
}

/// Fill the derived columns over the complete record set.
pub fn derive_summary_fields(records: Vec<ProductRecord>, reviews_collected: bool) -> Vec<ProductRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.brand = Some(brand_of(&record.tv_model).to_string());
            record.num_of_reviews = reviews_collected.then_some(record.reviews.len());
            record
        })
        .collect()
}

/// Final output of a crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDataset {
    pub records: Vec<ProductRecord>,
    pub reviews_collected: bool,
    pub pages_crawled: usize,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub pages: usize,
    pub products: usize,
    pub discounted: usize,
    pub reviews: usize,
}

impl CatalogDataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            pages: self.pages_crawled,
            products: self.records.len(),
            discounted: self.records.iter().filter(|r| r.discounted()).count(),
            reviews: self.records.iter().map(|r| r.reviews.len()).sum(),
        }
    }
}
