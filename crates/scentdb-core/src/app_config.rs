use std::path::PathBuf;
use std::str::FromStr;

/// How synthetic prices are generated. One policy applies to a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingPolicy {
    /// Price scales with the millilitre count of the size label.
    #[default]
    SizeScaled,
    /// Flat integer price range, independent of size.
    Flat,
}

impl std::fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingPolicy::SizeScaled => write!(f, "size-scaled"),
            PricingPolicy::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for PricingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "size-scaled" | "size_scaled" | "scaled" => Ok(PricingPolicy::SizeScaled),
            "flat" => Ok(PricingPolicy::Flat),
            other => Err(format!(
                "unknown pricing policy \"{other}\"; expected \"size-scaled\" or \"flat\""
            )),
        }
    }
}

/// Inclusive range of reference ids, written `"100-126"` in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    first: i64,
    last: i64,
}

impl IdRange {
    /// # Errors
    ///
    /// Returns `Err` if `first > last`.
    pub fn new(first: i64, last: i64) -> Result<Self, String> {
        if first > last {
            return Err(format!("range start {first} is greater than end {last}"));
        }
        Ok(Self { first, last })
    }

    #[must_use]
    pub fn first(&self) -> i64 {
        self.first
    }

    #[must_use]
    pub fn last(&self) -> i64 {
        self.last
    }

    /// Number of ids in the range, saturating at `usize::MAX`.
    #[must_use]
    pub fn len(&self) -> usize {
        let span = i128::from(self.last) - i128::from(self.first) + 1;
        usize::try_from(span).unwrap_or(usize::MAX)
    }

    /// Always `false`; a valid range holds at least one id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        (self.first..=self.last).contains(&id)
    }

    /// The `index`-th id of the range, counting from `first`.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<i64> {
        let offset = i128::try_from(index).ok()?;
        let id = i64::try_from(i128::from(self.first) + offset).ok()?;
        self.contains(id).then_some(id)
    }
}

impl std::fmt::Display for IdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl FromStr for IdRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (first, last) = match s.split_once('-') {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (s, s),
        };
        let first = first
            .parse::<i64>()
            .map_err(|e| format!("invalid range start \"{first}\": {e}"))?;
        let last = last
            .parse::<i64>()
            .map_err(|e| format!("invalid range end \"{last}\": {e}"))?;
        IdRange::new(first, last)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Storefront origin, e.g. `https://www.perfume24x7.com`.
    pub base_url: String,
    /// Path of the brand listing page relative to `base_url`.
    pub listing_path: String,
    pub output_dir: PathBuf,
    pub concentrations_path: PathBuf,
    pub pricing_policy: PricingPolicy,
    pub category_ids: IdRange,
    /// Fallback pool when no concentration name matches a product.
    pub concentration_ids: IdRange,
    /// Brand ids whose allocator slot is consumed but never crawled.
    pub excluded_brand_ids: Vec<i64>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Full URL of the brand listing page.
    #[must_use]
    pub fn listing_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.listing_path.trim_start_matches('/')
        )
    }
}
