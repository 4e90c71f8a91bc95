//! URL frontier
//!
//! Merges link extraction and sitemap resolution into the single deduplicated
//! candidate set consumed by the categorizer. This is the sole source of
//! "all known URLs" for a site.

use crate::crawler::links::extract_same_domain_links;
use crate::crawler::sitemap::resolve_sitemap;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Well-known sitemap locations, probed in order; the first location that
/// yields any URLs wins and the rest are not attempted.
const SITEMAP_CANDIDATES: &[&str] = &["/sitemap.xml", "/sitemap_index.xml"];

/// Discovers all candidate URLs for a site
///
/// The result is the union of the same-domain links in the supplied document
/// and the URLs reached from the site's sitemap, deduplicated by exact URL
/// string. Links come first (document order), then sitemap URLs.
///
/// # Arguments
///
/// * `client` - HTTP client for sitemap fetches
/// * `base_url` - The site's main page URL
/// * `html` - The main page markup
///
/// # Returns
///
/// Deduplicated candidate URLs in discovery order
pub async fn discover_urls(client: &Client, base_url: &Url, html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut discovered = Vec::new();

    for link in extract_same_domain_links(base_url, html) {
        if seen.insert(link.clone()) {
            discovered.push(link);
        }
    }

    for candidate in SITEMAP_CANDIDATES {
        let Ok(sitemap_url) = base_url.join(candidate) else {
            continue;
        };

        let mut visited = HashSet::new();
        let urls = resolve_sitemap(client, sitemap_url.as_str(), &mut visited).await;

        if urls.is_empty() {
            continue;
        }

        tracing::info!("Found {} URLs in {}", urls.len(), sitemap_url);
        for url in urls {
            if seen.insert(url.clone()) {
                discovered.push(url);
            }
        }
        break;
    }

    discovered
}

// Frontier behavior depends on live sitemap fetches and is covered by the
// wiremock integration tests.
