use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_from_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.base_url, "https://www.perfume24x7.com");
    assert_eq!(cfg.listing_url(), "https://www.perfume24x7.com/collections");
    assert_eq!(cfg.output_dir, PathBuf::from("./data"));
    assert_eq!(
        cfg.concentrations_path,
        PathBuf::from("./data/concentrations.json")
    );
    assert_eq!(cfg.pricing_policy, PricingPolicy::SizeScaled);
    assert_eq!(cfg.category_ids, IdRange::new(100, 126).unwrap());
    assert_eq!(cfg.concentration_ids, IdRange::new(50, 53).unwrap());
    assert!(cfg.excluded_brand_ids.is_empty());
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "scentdb/0.1 (catalog-seed)");
}

#[test]
fn build_app_config_flat_pricing_override() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_PRICING_POLICY", "flat");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.pricing_policy, PricingPolicy::Flat);
}

#[test]
fn build_app_config_rejects_unknown_pricing_policy() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_PRICING_POLICY", "auction");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCENTDB_PRICING_POLICY"),
        "expected InvalidEnvVar(SCENTDB_PRICING_POLICY), got: {result:?}"
    );
}

#[test]
fn build_app_config_category_range_override() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_CATEGORY_IDS", "1-3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.category_ids, IdRange::new(1, 3).unwrap());
}

#[test]
fn build_app_config_rejects_reversed_category_range() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_CATEGORY_IDS", "126-100");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCENTDB_CATEGORY_IDS"),
        "expected InvalidEnvVar(SCENTDB_CATEGORY_IDS), got: {result:?}"
    );
}

#[test]
fn build_app_config_parses_excluded_brand_ids() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_EXCLUDED_BRAND_IDS", "1030, 1042,,");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.excluded_brand_ids, vec![1030, 1042]);
}

#[test]
fn build_app_config_rejects_non_numeric_excluded_brand_id() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_EXCLUDED_BRAND_IDS", "1030,abc");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCENTDB_EXCLUDED_BRAND_IDS"),
        "expected InvalidEnvVar(SCENTDB_EXCLUDED_BRAND_IDS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCENTDB_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SCENTDB_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_base_url_without_scheme() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_BASE_URL", "www.perfume24x7.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCENTDB_BASE_URL"),
        "expected InvalidEnvVar(SCENTDB_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCENTDB_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SCENTDB_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_accepts_category_range_up_to_i64_max() {
    let mut map = HashMap::new();
    map.insert("SCENTDB_CATEGORY_IDS", "0-9223372036854775807");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.category_ids.first(), 0);
    assert_eq!(cfg.category_ids.last(), i64::MAX);
    assert_eq!(cfg.category_ids.len(), 1usize << 63);
}
