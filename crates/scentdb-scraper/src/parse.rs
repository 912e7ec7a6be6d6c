//! Size label parsing.
//!
//! Size variants arrive as free text (`"30ml"`, `"100 ML Refillable"`, or a
//! whole product name like `"Eau de Parfum 100ml Spray"`). The canonical form
//! is `"<integer> ml"`, which is also the dedup key of the size table.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical label used when no millilitre count can be found.
pub const DEFAULT_SIZE_LABEL: &str = "100 ml";

static ML_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*ml").expect("valid ml regex"));

/// Returns the millilitre count in `label`: the digit run immediately before
/// the first `ml` (whitespace allowed in between). Case-insensitive.
#[must_use]
pub fn parse_ml(label: &str) -> Option<u32> {
    let lower = label.to_lowercase();
    ML_RE
        .captures_iter(&lower)
        .find_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
}

/// Canonicalizes a raw size label to `"<integer> ml"`, falling back to
/// [`DEFAULT_SIZE_LABEL`].
#[must_use]
pub fn canonical_size_label(label: &str) -> String {
    parse_ml(label).map_or_else(|| DEFAULT_SIZE_LABEL.to_string(), |ml| format!("{ml} ml"))
}

/// `true` when the label advertises a refillable bottle.
#[must_use]
pub fn is_refillable(label: &str) -> bool {
    label.to_lowercase().contains("refillable")
}
