//! CSS selectors for the catalog markup
//!
//! Defaults match the observed Euronics smart TV listing. Multi-class
//! elements are matched on their exact class attribute, so a node carrying an
//! extra class (an `old-price` marker, say) is not picked up. Every selector
//! is overridable from the config file.

use serde::{Deserialize, Serialize};

/// Selectors for listing pages, product tiles and detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSelectors {
    /// Page-selector control on the root listing page
    pub page_selector: String,

    /// Options inside the page-selector control
    pub page_option: String,

    /// One product tile on a listing page
    pub product_container: String,

    /// Multi-line block whose second line is the model title
    pub title_block: String,

    pub category: String,
    pub dimension: String,

    /// Price of a product sold at full price
    pub standard_price: String,

    /// Price of a product on sale
    pub discounted_price: String,

    /// "Risparmi il NN%" badge next to a sale price
    pub discount_label: String,

    /// Phrase stripped from the discount label to get the rate
    pub discount_prefix: String,

    /// Link from a tile to its detail page
    pub detail_link: String,

    /// Review body on a detail page
    pub review_body: String,
}

impl Default for CatalogSelectors {
    fn default() -> Self {
        Self {
            page_selector: r#"select[class="form-control change-pages"]"#.to_string(),
            page_option: "option".to_string(),
            product_container: r#"div[class="col-md-3 col-sm-3 col-xs-6 product-layout grid-mode"]"#.to_string(),
            title_block: r#"div[class="col-4 tile-body py-3"]"#.to_string(),
            category: "p.tile-category".to_string(),
            dimension: r#"p[class="body-medium mb-0"]"#.to_string(),
            standard_price: r#"div[class="sales text-center mb-3"]"#.to_string(),
            discounted_price: r#"span[class="value font-bold text-nowrap h2"]"#.to_string(),
            discount_label: r#"small[class="font-bold txt-light-blue discount text-center mt-auto mb-0 mr-3"]"#
                .to_string(),
            discount_prefix: "Risparmi il ".to_string(),
            detail_link: "a[href]".to_string(),
            review_body: "div.bv-content-summary-body-text".to_string(),
        }
    }
}
