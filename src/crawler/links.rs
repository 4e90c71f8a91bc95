//! Same-domain link extraction
//!
//! Pulls hyperlink targets out of a page's markup, resolves them to absolute
//! URLs against the page URL, and keeps only those on the exact same host.

use crate::url::same_host;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the same-domain hyperlinks from a page
///
/// Every `<a href>` target is resolved against `page_url`; targets whose
/// host does not exactly match the page's host are dropped, as are
/// non-HTTP(S) schemes (`mailto:`, `javascript:`, ...) and fragment-only
/// anchors. The result is deduplicated by exact URL string, in document
/// order. A page without markup or without links yields an empty list,
/// not an error.
///
/// # Arguments
///
/// * `page_url` - The URL the markup was fetched from
/// * `html` - The page markup
///
/// # Returns
///
/// Absolute same-domain URLs in first-seen order
pub fn extract_same_domain_links(page_url: &Url, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(absolute) = resolve_link(href, page_url) {
            if seen.insert(absolute.clone()) {
                links.push(absolute);
            }
        }
    }

    links
}

/// Resolves an href to an absolute same-host URL, or None if excluded
fn resolve_link(href: &str, page_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let absolute = page_url.join(href).ok()?;

    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return None;
    }

    if !same_host(&absolute, page_url) {
        return None;
    }

    Some(absolute.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_extract_relative_link() {
        let html = r#"<html><body><a href="/about">About</a></body></html>"#;
        let links = extract_same_domain_links(&page_url(), html);
        assert_eq!(links, vec!["https://example.com/about"]);
    }

    #[test]
    fn test_extract_absolute_same_domain_link() {
        let html = r#"<html><body><a href="https://example.com/pricing">Pricing</a></body></html>"#;
        let links = extract_same_domain_links(&page_url(), html);
        assert_eq!(links, vec!["https://example.com/pricing"]);
    }

    #[test]
    fn test_skip_external_domain() {
        let html = r#"<html><body><a href="https://other.com/page">External</a></body></html>"#;
        let links = extract_same_domain_links(&page_url(), html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_subdomain() {
        let html = r#"<html><body><a href="https://blog.example.com/post">Blog</a></body></html>"#;
        let links = extract_same_domain_links(&page_url(), html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_mailto_and_javascript() {
        let html = r#"<html><body>
            <a href="mailto:hi@example.com">Mail</a>
            <a href="javascript:void(0)">JS</a>
            <a href="tel:+123456">Call</a>
        </body></html>"#;
        let links = extract_same_domain_links(&page_url(), html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_fragment_only() {
        let html = r##"<html><body><a href="#top">Top</a></body></html>"##;
        let links = extract_same_domain_links(&page_url(), html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicate_links_deduplicated() {
        let html = r#"<html><body>
            <a href="/about">About</a>
            <a href="/about">About again</a>
        </body></html>"#;
        let links = extract_same_domain_links(&page_url(), html);
        assert_eq!(links, vec!["https://example.com/about"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"<html><body>
            <a href="/b">B</a>
            <a href="/a">A</a>
        </body></html>"#;
        let links = extract_same_domain_links(&page_url(), html);
        assert_eq!(
            links,
            vec!["https://example.com/b", "https://example.com/a"]
        );
    }

    #[test]
    fn test_no_markup_is_empty() {
        assert!(extract_same_domain_links(&page_url(), "").is_empty());
        assert!(extract_same_domain_links(&page_url(), "plain text only").is_empty());
    }
}
