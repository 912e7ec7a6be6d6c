pub mod app_config;
pub mod catalog;
pub mod concentrations;
pub mod config;
pub mod slug;

use thiserror::Error;

pub use app_config::{AppConfig, IdRange, PricingPolicy};
pub use catalog::{Brand, CatalogDataset, Concentration, Image, Product, Quantity, Size};
pub use concentrations::load_concentrations;
pub use config::{load_app_config, load_app_config_from_env};
pub use slug::slugify;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read concentrations file {path}: {source}")]
    ConcentrationsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse concentrations file: {0}")]
    ConcentrationsFileParse(#[source] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
