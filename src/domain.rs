//! Domain layer: records, document queries, pagination and collaborator traits

pub mod document;
pub mod pagination;
pub mod product;
pub mod services;

pub use document::{Lookup, Node, NodeQuery, PageDocument};
pub use pagination::PaginationPlanner;
pub use product::{CatalogDataset, DatasetSummary, PriceTag, ProductRecord};
pub use services::{DatasetWriter, DocumentFetcher};
