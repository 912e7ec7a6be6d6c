//! Page-level extractors for the three storefront page kinds.
//!
//! Extractors return owned values with every field optional, so a parsed
//! [`Page`] never has to outlive the function call. URLs are returned exactly
//! as they appear in the markup; resolution happens in [`crate::crawl`].

use crate::page::{
    attr, find_all_by_class, find_one_by_attribute, find_one_by_class, inner_markup, select_all,
    select_one, text, Page,
};

const BRAND_LINK: (&str, &str) = ("a", "logo-bar__link");
const BRAND_LOGO: (&str, &str) = ("img", "logo-bar__image");
const BRAND_TITLE: (&str, &str) = ("h1", "section-header__title");
const PRODUCT_LINK: (&str, &str) = ("a", "grid-product__link");
const PRODUCT_TITLE: (&str, &str) = ("h1", "product-single__title");
const PRODUCT_THUMB: (&str, &str) = ("a", "product__thumb");
const DESCRIPTION_BLOCKS: &str = "div.product-block div.rte";
const HERO_IMAGE: &str = "div.image-wrap > image-element > img";
const SIZE_FIELDSET: (&str, &str) = ("fieldset", "variant-input-wrap");
const SIZE_LABELS: &str = "div.variant-input > label.variant__button-label";

/// One brand entry on the catalog listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandLink {
    pub href: Option<String>,
    pub logo_src: Option<String>,
}

/// Brand detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandPage {
    pub name: Option<String>,
    pub product_links: Vec<String>,
}

/// Product detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPage {
    pub name: Option<String>,
    /// Inner HTML of the second rich-text block; the first is the short blurb.
    pub description: Option<String>,
    pub hero_image: Option<String>,
    /// Thumbnail gallery targets in display order.
    pub gallery: Vec<String>,
    /// `None` when the page has no size selector; otherwise one entry per
    /// offered size (blank labels kept as empty strings).
    pub size_labels: Option<Vec<String>>,
}

/// Brand links on the catalog root, in listing order.
#[must_use]
pub fn brand_links(page: &Page) -> Vec<BrandLink> {
    find_all_by_class(page.root(), BRAND_LINK.0, BRAND_LINK.1)
        .into_iter()
        .map(|link| BrandLink {
            href: attr(link, "href"),
            logo_src: find_one_by_class(link, BRAND_LOGO.0, BRAND_LOGO.1)
                .and_then(|img| attr(img, "src")),
        })
        .collect()
}

#[must_use]
pub fn brand_page(page: &Page) -> BrandPage {
    let root = page.root();
    let name = find_one_by_class(root, BRAND_TITLE.0, BRAND_TITLE.1).and_then(text);
    if name.is_none() {
        tracing::debug!(selector = "h1.section-header__title", "brand title not found");
    }

    let product_links = find_all_by_class(root, PRODUCT_LINK.0, PRODUCT_LINK.1)
        .into_iter()
        .filter_map(|link| attr(link, "href"))
        .collect();

    BrandPage {
        name,
        product_links,
    }
}

#[must_use]
pub fn product_page(page: &Page) -> ProductPage {
    let root = page.root();

    let name = find_one_by_class(root, PRODUCT_TITLE.0, PRODUCT_TITLE.1).and_then(text);
    if name.is_none() {
        tracing::debug!(selector = "h1.product-single__title", "product title not found");
    }

    let description = select_all(root, DESCRIPTION_BLOCKS)
        .get(1)
        .copied()
        .and_then(inner_markup);
    if description.is_none() {
        tracing::debug!(selector = DESCRIPTION_BLOCKS, "second description block not found");
    }

    let hero_image = select_one(root, HERO_IMAGE).and_then(|img| attr(img, "src"));

    let gallery = find_all_by_class(root, PRODUCT_THUMB.0, PRODUCT_THUMB.1)
        .into_iter()
        .filter_map(|thumb| attr(thumb, "href"))
        .collect();

    let size_labels =
        find_one_by_attribute(root, SIZE_FIELDSET.0, SIZE_FIELDSET.1, "name", "Size").map(
            |fieldset| {
                select_all(fieldset, SIZE_LABELS)
                    .into_iter()
                    .map(|label| text(label).unwrap_or_default())
                    .collect()
            },
        );

    ProductPage {
        name,
        description,
        hero_image,
        gallery,
        size_labels,
    }
}
