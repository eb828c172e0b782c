//! HTML extraction for catalog listing tiles
//!
//! Selectors are configured in one place and compiled once into the
//! extractor.

pub mod config;
pub mod product_field_extractor;

pub use config::CatalogSelectors;
pub use product_field_extractor::ProductFieldExtractor;
