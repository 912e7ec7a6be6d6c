//! `crawl` command: load reference data, walk the storefront, export JSON.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scentdb_core::AppConfig;
use scentdb_scraper::{crawl_catalog, CrawlConfig, CrawlReport, StorefrontClient};

/// Runs one full crawl and writes the dataset to `config.output_dir`.
///
/// # Errors
///
/// Returns an error if the base URL is not http(s), the concentration table
/// cannot be loaded, the HTTP client cannot be built, or any collection file
/// fails to write. Page-level failures are logged and never surface here.
pub(crate) async fn run_crawl(config: &AppConfig, seed: Option<u64>) -> anyhow::Result<()> {
    anyhow::ensure!(
        config.base_url.starts_with("http://") || config.base_url.starts_with("https://"),
        "base URL must start with http:// or https://, got {}",
        config.base_url
    );

    let concentrations = scentdb_core::load_concentrations(&config.concentrations_path)?;
    let client = StorefrontClient::new(config.request_timeout_secs, &config.user_agent)?;
    let crawl_config = CrawlConfig::from_app_config(config, concentrations);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(
        listing = %crawl_config.listing_url,
        pricing = %config.pricing_policy,
        seed = ?seed,
        "starting catalog crawl"
    );
    let outcome = crawl_catalog(&client, &crawl_config, &mut rng).await;
    log_report(&outcome.report);

    let summary = scentdb_export::write_dataset(&config.output_dir, &outcome.dataset);
    if !summary.is_complete() {
        anyhow::bail!(
            "{} of {} collection files failed to write to {}",
            summary.failures.len(),
            scentdb_export::COLLECTION_FILES.len(),
            config.output_dir.display()
        );
    }

    println!(
        "crawl complete: {} brands, {} products, {} images, {} sizes, {} quantities -> {}",
        outcome.report.brands,
        outcome.report.products,
        outcome.report.images,
        outcome.report.sizes,
        outcome.report.quantities,
        config.output_dir.display()
    );
    Ok(())
}

fn log_report(report: &CrawlReport) {
    tracing::info!(
        brands = report.brands,
        products = report.products,
        images = report.images,
        sizes = report.sizes,
        quantities = report.quantities,
        "crawl finished"
    );
    if report.failed_fetches > 0 || report.skipped_products > 0 {
        tracing::warn!(
            failed_fetches = report.failed_fetches,
            skipped_products = report.skipped_products,
            skipped_brands = report.skipped_brands,
            missing_fields = report.missing_fields,
            "crawl finished with gaps"
        );
    }
}
