use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use smart_tv_catalog_lib::infrastructure::logging::init_logging_with_config;
use smart_tv_catalog_lib::infrastructure::{ConfigManager, HttpClientConfig};
use smart_tv_catalog_lib::{AppConfig, CatalogPipeline, CsvDatasetWriter, HttpDocumentFetcher};

/// Crawl the smart TV catalog and export it as CSV.
#[derive(Parser, Debug)]
#[command(name = "smart-tv-catalog", version, about)]
struct Cli {
    /// Config file (TOML/JSON/YAML); defaults to the user config directory
    #[arg(long, env = "SMART_TV_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog root URL
    #[arg(long)]
    root_url: Option<String>,

    /// Output CSV path
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Seconds to wait before every request
    #[arg(long)]
    delay: Option<u64>,

    /// Skip detail pages and reviews
    #[arg(long)]
    no_reviews: bool,
}

impl Cli {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(root_url) = &self.root_url {
            config.crawling.root_url.clone_from(root_url);
        }
        if let Some(output) = &self.output {
            config.output.csv_path.clone_from(output);
        }
        if let Some(delay) = self.delay {
            config.crawling.crawl_delay_seconds = delay;
        }
        if self.no_reviews {
            config.crawling.collect_reviews = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_manager = ConfigManager::new(cli.config.clone());
    let config = cli.apply(config_manager.load_config()?);

    init_logging_with_config(&config.logging)?;
    if let Some(path) = config_manager.config_path() {
        info!("Configuration file (optional): {}", path.display());
    }
    info!(
        "Starting crawl of {} (delay {}s, reviews: {})",
        config.crawling.root_url, config.crawling.crawl_delay_seconds, config.crawling.collect_reviews
    );

    let fetcher = Arc::new(HttpDocumentFetcher::new(HttpClientConfig::from_crawling_config(
        &config.crawling,
    ))?);
    let pipeline = CatalogPipeline::new(fetcher.clone(), &config.crawling, &config.selectors)?;
    let mut writer = CsvDatasetWriter::new(&config.output.csv_path);

    let dataset = match pipeline
        .run_and_persist(&config.crawling.root_url, &mut writer)
        .await
    {
        Ok(dataset) => dataset,
        Err(e) => {
            if e.is_layout_change() {
                error!("Crawl aborted, the catalog markup no longer matches the configured selectors: {}", e);
            } else {
                error!("Crawl aborted: {}", e);
            }
            return Err(e).context("catalog crawl failed");
        }
    };

    let summary = dataset.summary();
    info!(
        "✅ Crawl finished: {} pages, {} products ({} discounted), {} reviews, {} requests → {}",
        summary.pages,
        summary.products,
        summary.discounted,
        summary.reviews,
        fetcher.fetch_count(),
        writer.path().display()
    );
    Ok(())
}
