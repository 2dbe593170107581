mod archiver;
mod collector;
mod error;
mod models;
mod parser;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use collector::Collector;

const ALLOWED_DOMAIN: &str = "www.nike.com";
const TARGET_URL: &str = "https://www.nike.com/in/w/lifestyle-shoes-13jrmzy7ok";
const OUTPUT_FILE: &str = "products.json";

fn main() {
    init_logger();
    run(ALLOWED_DOMAIN, TARGET_URL, OUTPUT_FILE);
}

/// One full scrape: configure, fetch, extract, persist. Every failure is
/// logged and non-fatal; a failed fetch still persists an empty array.
fn run(allowed_domain: &str, url: &str, output: impl AsRef<Path>) {
    let output = output.as_ref();

    let products = match fetch_products(allowed_domain, url) {
        Ok(products) => products,
        Err(err) => {
            tracing::error!("Error: {} failed: {}", url, err);
            Vec::new()
        }
    };

    if let Err(err) = archiver::save_to_file(&products, output) {
        tracing::error!("Failed to write {}: {}", output.display(), err);
        return;
    }
    tracing::info!("Archived {} products to {}", products.len(), output.display());
}

fn fetch_products(allowed_domain: &str, url: &str) -> error::Result<Vec<models::Product>> {
    let collector = Collector::new(allowed_domain)?;
    let html = collector.visit(url)?;
    Ok(parser::extract_products(&html))
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nike_card_scraper=info,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
