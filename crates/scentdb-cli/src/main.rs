mod crawl;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scentdb_core::PricingPolicy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scentdb-cli")]
#[command(about = "Perfume catalog crawler and seed-data exporter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl the storefront and write the five JSON collections
    Crawl {
        /// Storefront origin, overriding SCENTDB_BASE_URL
        #[arg(long)]
        base_url: Option<String>,
        /// Output directory, overriding SCENTDB_OUTPUT_DIR
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Price generation policy: size-scaled or flat
        #[arg(long)]
        pricing: Option<PricingPolicy>,
        /// Seed for the synthetic attribute generator; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check an output directory for referential integrity
    Validate {
        /// Directory to check, overriding SCENTDB_OUTPUT_DIR
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = scentdb_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Crawl {
            base_url,
            output_dir,
            pricing,
            seed,
        } => {
            apply_overrides(&mut config, base_url, output_dir, pricing);
            crawl::run_crawl(&config, seed).await?;
        }
        Commands::Validate { output_dir } => {
            apply_overrides(&mut config, None, output_dir, None);
            validate::run_validate(&config.output_dir)?;
        }
    }

    Ok(())
}

fn apply_overrides(
    config: &mut scentdb_core::AppConfig,
    base_url: Option<String>,
    output_dir: Option<PathBuf>,
    pricing: Option<PricingPolicy>,
) {
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }
    if let Some(pricing) = pricing {
        config.pricing_policy = pricing;
    }
}
