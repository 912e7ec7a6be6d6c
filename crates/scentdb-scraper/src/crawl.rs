//! Catalog traversal: listing page → brand pages → product pages.
//!
//! The crawl is strictly sequential. Each page is fetched, reduced to an
//! owned extract, and dropped before the next request. A page that cannot be
//! fetched is logged and treated as absent; nothing in here aborts the run.

use rand::Rng;
use scentdb_core::{slugify, AppConfig, Brand, CatalogDataset, Concentration, Image, Product, Quantity};

use crate::client::{image_url, resolve_link, PageSource};
use crate::extract::{self, BrandLink, ProductPage};
use crate::ids::{EntityKind, IdAllocator};
use crate::page::Page;
use crate::parse::{canonical_size_label, parse_ml};
use crate::sizes::SizeTable;
use crate::synth::AttributeGenerator;

/// Predicate over an allocated brand id; `true` skips the brand.
pub type SkipBrand = Box<dyn Fn(i64) -> bool + Send + Sync>;

/// Everything a crawl needs besides the page source and the random generator.
pub struct CrawlConfig {
    /// Base for resolving relative links and image paths.
    pub base_url: String,
    /// Catalog root listing every brand.
    pub listing_url: String,
    pub attributes: AttributeGenerator,
    pub skip_brand: SkipBrand,
}

impl CrawlConfig {
    /// Builds a crawl configuration from application settings and the loaded
    /// concentration reference table.
    #[must_use]
    pub fn from_app_config(config: &AppConfig, concentrations: Vec<Concentration>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            listing_url: config.listing_url(),
            attributes: AttributeGenerator::new(
                config.category_ids,
                concentrations,
                config.concentration_ids,
                config.pricing_policy,
            ),
            skip_brand: skip_brand_ids(config.excluded_brand_ids.clone()),
        }
    }
}

/// Skip predicate matching a fixed list of brand ids.
#[must_use]
pub fn skip_brand_ids(ids: Vec<i64>) -> SkipBrand {
    Box::new(move |id| ids.contains(&id))
}

/// Skip predicate that never matches.
#[must_use]
pub fn skip_none() -> SkipBrand {
    Box::new(|_| false)
}

/// Counters describing how a crawl went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    pub brands: usize,
    pub products: usize,
    pub images: usize,
    pub sizes: usize,
    pub quantities: usize,
    /// Brand slots consumed by the skip predicate.
    pub skipped_brands: usize,
    /// Product links whose page could not be fetched.
    pub skipped_products: usize,
    pub failed_fetches: usize,
    /// Fields left null or rows not emitted because markup was missing.
    pub missing_fields: usize,
}

/// Result of a crawl: the five collections plus the run report.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub dataset: CatalogDataset,
    pub report: CrawlReport,
}

/// Mutable state of one crawl: id counters, the size dimension table, and
/// the accumulated output rows.
#[derive(Debug, Default)]
struct PipelineContext {
    ids: IdAllocator,
    sizes: SizeTable,
    brands: Vec<Brand>,
    images: Vec<Image>,
    products: Vec<Product>,
    quantities: Vec<Quantity>,
    report: CrawlReport,
}

impl PipelineContext {
    fn push_image(&mut self, product_id: Option<i64>, brand_id: Option<i64>, path: String, main: bool) {
        let id = self.ids.next(EntityKind::Image);
        self.images.push(Image {
            id,
            product_id,
            category_id: None,
            brand_id,
            path,
            main,
        });
    }

    fn finish(self) -> CrawlOutcome {
        let mut report = self.report;
        report.brands = self.brands.len();
        report.products = self.products.len();
        report.images = self.images.len();
        report.sizes = self.sizes.rows().len();
        report.quantities = self.quantities.len();

        CrawlOutcome {
            dataset: CatalogDataset {
                brands: self.brands,
                images: self.images,
                products: self.products,
                sizes: self.sizes.into_rows(),
                quantities: self.quantities,
            },
            report,
        }
    }
}

/// Crawls the whole catalog once and returns every collected row.
///
/// Never fails: a missing listing page yields an empty dataset, a missing
/// brand page a brand without name or products, a missing product page a
/// skipped product.
pub async fn crawl_catalog<S, R>(source: &S, config: &CrawlConfig, rng: &mut R) -> CrawlOutcome
where
    S: PageSource,
    R: Rng + ?Sized,
{
    let mut ctx = PipelineContext::default();

    let Some(listing) = fetch(source, &config.listing_url, &mut ctx).await else {
        tracing::error!(url = %config.listing_url, "catalog listing unavailable; nothing to crawl");
        return ctx.finish();
    };
    let brand_links = extract::brand_links(&Page::parse(&listing));
    tracing::info!(brands = brand_links.len(), url = %config.listing_url, "catalog listing parsed");

    for link in &brand_links {
        crawl_brand(source, config, rng, &mut ctx, link).await;
    }

    ctx.finish()
}

async fn crawl_brand<S, R>(
    source: &S,
    config: &CrawlConfig,
    rng: &mut R,
    ctx: &mut PipelineContext,
    link: &BrandLink,
) where
    S: PageSource,
    R: Rng + ?Sized,
{
    let brand_id = ctx.ids.next(EntityKind::Brand);
    if (config.skip_brand)(brand_id) {
        tracing::info!(brand_id, href = ?link.href, "skipping excluded brand slot");
        ctx.report.skipped_brands += 1;
        return;
    }

    match link
        .logo_src
        .as_deref()
        .and_then(|src| image_url(&config.base_url, src))
    {
        Some(path) => ctx.push_image(None, Some(brand_id), path, true),
        None => {
            tracing::debug!(brand_id, "brand link has no logo image");
            ctx.report.missing_fields += 1;
        }
    }

    let brand_url = link
        .href
        .as_deref()
        .and_then(|href| resolve_link(&config.base_url, href));
    let brand_page = match brand_url {
        Some(url) => fetch(source, &url, ctx)
            .await
            .map(|html| extract::brand_page(&Page::parse(&html))),
        None => {
            tracing::warn!(brand_id, "brand link has no usable href");
            None
        }
    }
    .unwrap_or_default();

    if brand_page.name.is_none() {
        ctx.report.missing_fields += 1;
    }
    let slug = brand_page.name.as_deref().map(slugify);
    ctx.brands.push(Brand {
        id: brand_id,
        name: brand_page.name,
        slug,
    });

    tracing::info!(
        brand_id,
        products = brand_page.product_links.len(),
        "crawling brand"
    );

    for href in &brand_page.product_links {
        let Some(url) = resolve_link(&config.base_url, href) else {
            ctx.report.skipped_products += 1;
            continue;
        };
        crawl_product(source, config, rng, ctx, brand_id, &url).await;
    }
}

async fn crawl_product<S, R>(
    source: &S,
    config: &CrawlConfig,
    rng: &mut R,
    ctx: &mut PipelineContext,
    brand_id: i64,
    url: &str,
) where
    S: PageSource,
    R: Rng + ?Sized,
{
    let Some(html) = fetch(source, url, ctx).await else {
        ctx.report.skipped_products += 1;
        return;
    };
    let page = extract::product_page(&Page::parse(&html));

    let product_id = ctx.ids.next(EntityKind::Product);
    emit_product(config, rng, ctx, brand_id, product_id, &page);
    emit_gallery(config, ctx, product_id, &page);
    emit_quantities(config, rng, ctx, product_id, &page);
}

fn emit_product<R: Rng + ?Sized>(
    config: &CrawlConfig,
    rng: &mut R,
    ctx: &mut PipelineContext,
    brand_id: i64,
    product_id: i64,
    page: &ProductPage,
) {
    if page.name.is_none() {
        ctx.report.missing_fields += 1;
    }
    if page.description.is_none() {
        ctx.report.missing_fields += 1;
    }

    let slug = slugify(&format!(
        "{} p.{product_id}",
        page.name.as_deref().unwrap_or_default()
    ));
    let concentration_id = config.attributes.concentration(rng, page.name.as_deref());
    let categories = config.attributes.categories(rng);

    ctx.products.push(Product {
        id: product_id,
        name: page.name.clone(),
        slug,
        description: page.description.clone(),
        brand_id,
        concentration_id,
        categories,
    });
}

/// Gallery thumbnails when present (first one primary), otherwise the hero
/// image alone.
fn emit_gallery(config: &CrawlConfig, ctx: &mut PipelineContext, product_id: i64, page: &ProductPage) {
    let gallery: Vec<String> = page
        .gallery
        .iter()
        .filter_map(|raw| image_url(&config.base_url, raw))
        .collect();

    let paths = if gallery.is_empty() {
        page.hero_image
            .as_deref()
            .and_then(|raw| image_url(&config.base_url, raw))
            .into_iter()
            .collect()
    } else {
        gallery
    };

    if paths.is_empty() {
        tracing::debug!(product_id, "product page has no images");
        ctx.report.missing_fields += 1;
    }

    for (index, path) in paths.into_iter().enumerate() {
        ctx.push_image(Some(product_id), None, path, index == 0);
    }
}

/// One quantity per offered size, or a single quantity for the size implied
/// by the product name when the page has no usable size selector.
///
/// Price is drawn for the canonical size the quantity points at. A selector
/// label that names a volume keeps its own wording so a refillable option
/// still gets the wider range; a product name never does.
fn emit_quantities<R: Rng + ?Sized>(
    config: &CrawlConfig,
    rng: &mut R,
    ctx: &mut PipelineContext,
    product_id: i64,
    page: &ProductPage,
) {
    let (labels, from_selector): (Vec<&str>, bool) = match &page.size_labels {
        Some(labels) if !labels.is_empty() => (labels.iter().map(String::as_str).collect(), true),
        _ => (vec![page.name.as_deref().unwrap_or_default()], false),
    };

    for label in labels {
        let size_id = ctx.sizes.resolve(&mut ctx.ids, label);
        let size_name = canonical_size_label(label);
        let price_label = if from_selector && parse_ml(label).is_some() {
            label
        } else {
            size_name.as_str()
        };

        let id = ctx.ids.next(EntityKind::Quantity);
        let quantity = config.attributes.stock(rng);
        let price = config.attributes.price(rng, price_label);
        ctx.quantities.push(Quantity {
            id,
            product_id,
            size_id,
            quantity,
            price,
        });
    }
}

async fn fetch<S: PageSource>(source: &S, url: &str, ctx: &mut PipelineContext) -> Option<String> {
    match source.fetch_page(url).await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!(url, error = %e, "page fetch failed; treating as absent");
            ctx.report.failed_fetches += 1;
            None
        }
    }
}

#[cfg(test)]
#[path = "crawl_test.rs"]
mod tests;
