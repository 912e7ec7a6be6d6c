use std::path::PathBuf;

use crate::app_config::{AppConfig, IdRange, PricingPolicy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a config that
/// crawls the production storefront into `./data`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_range = |var: &str, default: &str| -> Result<IdRange, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<IdRange>().map_err(|e| invalid(var, e))
    };

    let log_level = or_default("SCENTDB_LOG_LEVEL", "info");

    let base_url = or_default("SCENTDB_BASE_URL", "https://www.perfume24x7.com");
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(invalid(
            "SCENTDB_BASE_URL",
            format!("\"{base_url}\" must start with http:// or https://"),
        ));
    }
    let listing_path = or_default("SCENTDB_LISTING_PATH", "/collections");

    let output_dir = PathBuf::from(or_default("SCENTDB_OUTPUT_DIR", "./data"));
    let concentrations_path = PathBuf::from(or_default(
        "SCENTDB_CONCENTRATIONS_PATH",
        "./data/concentrations.json",
    ));

    let pricing_policy = or_default("SCENTDB_PRICING_POLICY", "size-scaled")
        .parse::<PricingPolicy>()
        .map_err(|e| invalid("SCENTDB_PRICING_POLICY", e))?;

    let category_ids = parse_range("SCENTDB_CATEGORY_IDS", "100-126")?;
    let concentration_ids = parse_range("SCENTDB_CONCENTRATION_IDS", "50-53")?;

    let excluded_brand_ids = parse_id_list(&or_default("SCENTDB_EXCLUDED_BRAND_IDS", ""))
        .map_err(|e| invalid("SCENTDB_EXCLUDED_BRAND_IDS", e))?;

    let request_timeout_secs = parse_u64("SCENTDB_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "SCENTDB_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }
    let user_agent = or_default("SCENTDB_USER_AGENT", "scentdb/0.1 (catalog-seed)");

    Ok(AppConfig {
        log_level,
        base_url,
        listing_path,
        output_dir,
        concentrations_path,
        pricing_policy,
        category_ids,
        concentration_ids,
        excluded_brand_ids,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a comma-separated id list. Blank entries are ignored.
fn parse_id_list(raw: &str) -> Result<Vec<i64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|e| format!("invalid id \"{s}\": {e}"))
        })
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
