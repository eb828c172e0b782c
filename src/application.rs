//! Application layer module
//!
//! Use cases that drive the crawl: review collection, page harvesting and
//! the end-to-end catalog pipeline.

pub mod catalog_pipeline;
pub mod page_harvester;
pub mod review_collector;

pub use catalog_pipeline::CatalogPipeline;
pub use page_harvester::PageHarvester;
pub use review_collector::ReviewCollector;
