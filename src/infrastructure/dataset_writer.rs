//! CSV export of the crawled dataset
//!
//! Layout: unnamed row-index column, then the record columns. The
//! `num_of_reviews` column only exists when reviews were collected.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::product::{CatalogDataset, ProductRecord};
use crate::domain::services::DatasetWriter;
use crate::infrastructure::crawl_error::{CrawlError, CrawlResult};

pub const BASE_COLUMNS: [&str; 8] = [
    "tv_model",
    "category",
    "price",
    "dimension",
    "discounted",
    "discount_rate",
    "reviews",
    "brand",
];

pub const REVIEW_COUNT_COLUMN: &str = "num_of_reviews";

/// Header row for `dataset`, index column first.
pub fn header_for(dataset: &CatalogDataset) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(BASE_COLUMNS.len() + 2);
    header.push("");
    header.extend(BASE_COLUMNS);
    if dataset.reviews_collected {
        header.push(REVIEW_COUNT_COLUMN);
    }
    header
}

fn row_for(index: usize, record: &ProductRecord, reviews_collected: bool) -> CrawlResult<Vec<String>> {
    let reviews = serde_json::to_string(&record.reviews)
        .map_err(|e| CrawlError::output("<reviews>", e))?;

    let mut row = vec![
        index.to_string(),
        record.tv_model.clone(),
        record.category.clone(),
        record.price.clone(),
        record.dimension.clone(),
        if record.discounted() { "True" } else { "False" }.to_string(),
        record.discount_rate().unwrap_or_default().to_string(),
        reviews,
        record.brand.clone().unwrap_or_default(),
    ];
    if reviews_collected {
        row.push(
            record
                .num_of_reviews
                .unwrap_or(record.reviews.len())
                .to_string(),
        );
    }
    Ok(row)
}

/// Serialize `dataset` as CSV into any writer.
pub fn write_csv<W: Write>(dataset: &CatalogDataset, out: W) -> CrawlResult<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);
    let to_error = |e: csv::Error| CrawlError::output("<csv>", e);

    writer.write_record(header_for(dataset)).map_err(to_error)?;
    for (index, record) in dataset.records.iter().enumerate() {
        writer
            .write_record(row_for(index, record, dataset.reviews_collected)?)
            .map_err(to_error)?;
    }
    writer
        .flush()
        .map_err(|e| CrawlError::output("<csv>", e))
}

/// Writes the dataset to a CSV file, replacing any previous file.
pub struct CsvDatasetWriter {
    path: PathBuf,
}

impl CsvDatasetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetWriter for CsvDatasetWriter {
    fn write_dataset(&mut self, dataset: &CatalogDataset) -> CrawlResult<()> {
        let path_display = self.path.display().to_string();
        let file = File::create(&self.path).map_err(|e| CrawlError::output(&path_display, e))?;

        write_csv(dataset, file).map_err(|e| match e {
            CrawlError::Output { reason, .. } => CrawlError::output(&path_display, reason),
            other => other,
        })?;

        info!("Wrote {} rows to {}", dataset.len(), path_display);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::PriceTag;

    fn dataset(reviews_collected: bool) -> CatalogDataset {
        CatalogDataset {
            records: vec![
                ProductRecord {
                    tv_model: "Samsung - QE55".to_string(),
                    category: "Smart TV".to_string(),
                    dimension: "55\"".to_string(),
                    price: "599,00 €".to_string(),
                    price_tag: PriceTag::Standard,
                    reviews: vec!["Ottimo".to_string(), "Buono, \"consigliato\"".to_string()],
                    brand: Some("Samsung ".to_string()),
                    num_of_reviews: reviews_collected.then_some(2),
                },
                ProductRecord {
                    tv_model: "LG - 43UR".to_string(),
                    category: "Smart TV".to_string(),
                    dimension: "43\"".to_string(),
                    price: "299,00 €".to_string(),
                    price_tag: PriceTag::Discounted { rate: "20%".to_string() },
                    reviews: Vec::new(),
                    brand: Some("LG ".to_string()),
                    num_of_reviews: reviews_collected.then_some(0),
                },
            ],
            reviews_collected,
            pages_crawled: 1,
        }
    }

    fn read_back(bytes: &[u8]) -> Vec<csv::StringRecord> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes)
            .records()
            .map(Result::unwrap)
            .collect()
    }

    #[test]
    fn test_header_and_rows() {
        let mut out = Vec::new();
        write_csv(&dataset(true), &mut out).unwrap();
        let rows = read_back(&out);

        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            vec!["", "tv_model", "category", "price", "dimension", "discounted",
                 "discount_rate", "reviews", "brand", "num_of_reviews"]
        );
        assert_eq!(&rows[1][0], "0");
        assert_eq!(&rows[1][5], "False");
        assert_eq!(&rows[1][6], "");
        assert_eq!(&rows[1][7], r#"["Ottimo","Buono, \"consigliato\""]"#);
        assert_eq!(&rows[1][9], "2");
        assert_eq!(&rows[2][0], "1");
        assert_eq!(&rows[2][5], "True");
        assert_eq!(&rows[2][6], "20%");
        assert_eq!(&rows[2][8], "LG ");
    }

    #[test]
    fn test_no_review_count_column_without_reviews() {
        let mut out = Vec::new();
        write_csv(&dataset(false), &mut out).unwrap();
        let rows = read_back(&out);

        assert_eq!(rows[0].len(), 9);
        assert!(rows[0].iter().all(|column| column != REVIEW_COUNT_COLUMN));
        assert_eq!(rows[1].len(), 9);
    }

    #[test]
    fn test_empty_dataset_writes_header_only() {
        let empty = CatalogDataset {
            records: Vec::new(),
            reviews_collected: true,
            pages_crawled: 0,
        };
        let mut out = Vec::new();
        write_csv(&empty, &mut out).unwrap();
        assert_eq!(read_back(&out).len(), 1);
    }

    #[test]
    fn test_file_writer_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvDatasetWriter::new(dir.path().join("missing").join("out.csv"));
        let err = writer.write_dataset(&dataset(true)).unwrap_err();
        assert!(matches!(err, CrawlError::Output { ref path, .. } if path.ends_with("out.csv")));
    }
}
