//! Synthetic commercial attributes.
//!
//! The storefront exposes no stock, price, category, or concentration data in
//! a usable form, so the seed dataset fills them in: categories and stock are
//! random, concentration is matched from the product name, and price follows
//! the run's [`PricingPolicy`]. All randomness flows through the caller's
//! `Rng`, so a seeded generator reproduces a dataset exactly.

use rand::Rng;
use scentdb_core::{Concentration, IdRange, PricingPolicy};

use crate::parse::{is_refillable, parse_ml};

const MAX_CATEGORIES: usize = 5;
const STOCK_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
const SCALED_MULTIPLIER: f64 = 6.0;
const REFILLABLE_MULTIPLIER: f64 = 1.5;
const UNSIZED_PRICE_RANGE: (f64, f64) = (100.0, 1500.0);
const FLAT_PRICE_RANGE: std::ops::RangeInclusive<u32> = 800..=8000;

/// Generates the synthetic fields of products and quantities for one run.
#[derive(Debug, Clone)]
pub struct AttributeGenerator {
    category_ids: IdRange,
    concentrations: Vec<Concentration>,
    concentration_fallback: IdRange,
    pricing: PricingPolicy,
}

impl AttributeGenerator {
    #[must_use]
    pub fn new(
        category_ids: IdRange,
        concentrations: Vec<Concentration>,
        concentration_fallback: IdRange,
        pricing: PricingPolicy,
    ) -> Self {
        Self {
            category_ids,
            concentrations,
            concentration_fallback,
            pricing,
        }
    }

    /// 1 to 5 distinct category ids, sampled without replacement.
    pub fn categories<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        let available = self.category_ids.len();
        let amount = rng.random_range(1..=available.min(MAX_CATEGORIES));
        rand::seq::index::sample(rng, available, amount)
            .into_iter()
            .filter_map(|index| self.category_ids.nth(index))
            .collect()
    }

    /// Id of the first reference concentration whose name occurs in the
    /// product name (case-insensitive); a random fallback id otherwise.
    pub fn concentration<R: Rng + ?Sized>(&self, rng: &mut R, product_name: Option<&str>) -> i64 {
        let matched = product_name.and_then(|name| {
            let lower = name.to_lowercase();
            self.concentrations
                .iter()
                .find(|c| lower.contains(&c.name.to_lowercase()))
                .map(|c| c.id)
        });

        matched.unwrap_or_else(|| {
            rng.random_range(self.concentration_fallback.first()..=self.concentration_fallback.last())
        })
    }

    /// Random stock count in `[1, 100]`.
    pub fn stock<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(STOCK_RANGE)
    }

    /// Price for one size variant under the run's pricing policy.
    pub fn price<R: Rng + ?Sized>(&self, rng: &mut R, size_label: &str) -> f64 {
        match self.pricing {
            PricingPolicy::SizeScaled => size_scaled_price(rng, size_label),
            PricingPolicy::Flat => f64::from(rng.random_range(FLAT_PRICE_RANGE)),
        }
    }
}

/// Uniform in `[N, 6N]` for an `N ml` label (upper bound ×1.5 when
/// refillable), `[100, 1500]` when the label has no size. Two decimals.
fn size_scaled_price<R: Rng + ?Sized>(rng: &mut R, size_label: &str) -> f64 {
    let (low, mut high) = parse_ml(size_label).map_or(UNSIZED_PRICE_RANGE, |ml| {
        let ml = f64::from(ml);
        (ml, ml * SCALED_MULTIPLIER)
    });
    if is_refillable(size_label) {
        high *= REFILLABLE_MULTIPLIER;
    }
    round_cents(rng.random_range(low..=high))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
