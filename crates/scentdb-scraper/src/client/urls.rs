//! URL resolution for links and image paths scraped from storefront markup.

/// Resolves a scraped `href` against the storefront base URL.
///
/// Given base `"https://www.perfume24x7.com"` and href
/// `"/collections/dior"`, returns `"https://www.perfume24x7.com/collections/dior"`.
/// Absolute hrefs are returned unchanged. Returns `None` for blank input or a
/// base that does not parse.
#[must_use]
pub fn resolve_link(base_url: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let base = match reqwest::Url::parse(base_url) {
        Ok(base) => base,
        Err(e) => {
            tracing::warn!(base_url, error = %e, "could not parse base URL; dropping link");
            return None;
        }
    };
    base.join(href).ok().map(|u| u.to_string())
}

/// Turns a scraped image `src`/`href` into an absolute `https` URL.
///
/// Storefront CDNs emit protocol-relative paths (`//cdn.shopify.com/...`);
/// those get the `https:` scheme. Root-relative paths resolve against the
/// base URL like any other link.
#[must_use]
pub fn image_url(base_url: &str, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix("//") {
        if rest.is_empty() {
            return None;
        }
        return Some(format!("https://{rest}"));
    }
    resolve_link(base_url, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_link_joins_root_relative_href() {
        assert_eq!(
            resolve_link("https://www.perfume24x7.com", "/collections/dior").as_deref(),
            Some("https://www.perfume24x7.com/collections/dior")
        );
    }

    #[test]
    fn resolve_link_keeps_absolute_href() {
        assert_eq!(
            resolve_link("https://www.perfume24x7.com", "https://other.example/p/1").as_deref(),
            Some("https://other.example/p/1")
        );
    }

    #[test]
    fn resolve_link_rejects_blank_href() {
        assert!(resolve_link("https://www.perfume24x7.com", "   ").is_none());
    }

    #[test]
    fn resolve_link_rejects_unparseable_base() {
        assert!(resolve_link("not a url", "/collections").is_none());
    }

    #[test]
    fn image_url_rewrites_protocol_relative_path() {
        assert_eq!(
            image_url(
                "https://www.perfume24x7.com",
                "//www.perfume24x7.com/cdn/shop/files/logo.png?v=1"
            )
            .as_deref(),
            Some("https://www.perfume24x7.com/cdn/shop/files/logo.png?v=1")
        );
    }

    #[test]
    fn image_url_resolves_root_relative_path() {
        assert_eq!(
            image_url("https://www.perfume24x7.com", "/cdn/shop/files/a.jpg").as_deref(),
            Some("https://www.perfume24x7.com/cdn/shop/files/a.jpg")
        );
    }

    #[test]
    fn image_url_keeps_already_decoded_query() {
        assert_eq!(
            image_url("https://shop.example", "//cdn.example/a.jpg?v=1&width=200").as_deref(),
            Some("https://cdn.example/a.jpg?v=1&width=200")
        );
    }

    #[test]
    fn literal_amp_sequence_is_not_decoded_twice() {
        assert_eq!(
            image_url("https://shop.example", "//cdn.example/a.jpg?q=x&amp;y").as_deref(),
            Some("https://cdn.example/a.jpg?q=x&amp;y")
        );
        assert_eq!(
            resolve_link("https://shop.example", "/search?q=rock&amp;roll").as_deref(),
            Some("https://shop.example/search?q=rock&amp;roll")
        );
    }

    #[test]
    fn image_url_rejects_bare_slashes() {
        assert!(image_url("https://shop.example", "//").is_none());
    }
}
