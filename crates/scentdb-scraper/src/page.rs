//! Page access primitives over parsed HTML.
//!
//! Every lookup returns `Option`/`Vec` rather than an error: a missing node, a
//! malformed selector, or an empty text node all read as "absent" to callers.
//! Selector problems are logged so a broken query is still visible in the run
//! log.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub struct Page {
    document: Html,
}

impl Page {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// The `<html>` element; the starting node for every query.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!(selector = css, error = %e, "invalid CSS selector; treating as no match");
            None
        }
    }
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// All `tag` descendants of `node` whose class list contains `class`.
#[must_use]
pub fn find_all_by_class<'a>(node: ElementRef<'a>, tag: &str, class: &str) -> Vec<ElementRef<'a>> {
    let Some(tag_selector) = selector(tag) else {
        return Vec::new();
    };
    node.select(&tag_selector)
        .filter(|el| has_class(*el, class))
        .collect()
}

/// First `tag` descendant of `node` whose class list contains `class`.
#[must_use]
pub fn find_one_by_class<'a>(node: ElementRef<'a>, tag: &str, class: &str) -> Option<ElementRef<'a>> {
    let tag_selector = selector(tag)?;
    node.select(&tag_selector).find(|el| has_class(*el, class))
}

/// First descendant matching a CSS selector.
#[must_use]
pub fn select_one<'a>(node: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let css_selector = selector(css)?;
    node.select(&css_selector).next()
}

/// All descendants matching a CSS selector, in document order.
#[must_use]
pub fn select_all<'a>(node: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    let Some(css_selector) = selector(css) else {
        return Vec::new();
    };
    node.select(&css_selector).collect()
}

/// First `tag` descendant with class `class` whose `attr` equals `value`.
#[must_use]
pub fn find_one_by_attribute<'a>(
    node: ElementRef<'a>,
    tag: &str,
    class: &str,
    attr: &str,
    value: &str,
) -> Option<ElementRef<'a>> {
    let tag_selector = selector(tag)?;
    node.select(&tag_selector)
        .find(|el| has_class(*el, class) && el.value().attr(attr) == Some(value))
}

/// Visible text of `node`: fragments concatenated as written, whitespace runs
/// collapsed to one space, ends trimmed. `None` when nothing visible remains.
#[must_use]
pub fn text(node: ElementRef<'_>) -> Option<String> {
    let raw: String = node.text().collect();
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

/// Raw inner HTML of `node`. `None` when the element is empty.
#[must_use]
pub fn inner_markup(node: ElementRef<'_>) -> Option<String> {
    let html = node.inner_html();
    (!html.trim().is_empty()).then_some(html)
}

/// Trimmed attribute value. `None` when missing or blank.
#[must_use]
pub fn attr(node: ElementRef<'_>, name: &str) -> Option<String> {
    node.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
