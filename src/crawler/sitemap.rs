//! Sitemap resolver
//!
//! Fetches and expands XML sitemaps into a flat URL list. A sitemap index
//! (`<sitemapindex>`) is resolved recursively through its `<sitemap><loc>`
//! children; a regular sitemap (`<urlset>`) contributes its `<url><loc>`
//! entries. The caller-supplied `visited` set guards against cycles:
//! self-referencing or mutually-referencing indexes terminate because a
//! sitemap URL is only ever fetched once per resolution tree.
//!
//! Any failure at a single node (network error, non-2xx status, malformed
//! XML) yields an empty contribution from that node only; sibling nodes are
//! still resolved.

use crate::crawler::fetcher::fetch_text;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

/// `<sitemapindex>` document: a list of child sitemap references
#[derive(Debug, Deserialize)]
struct SitemapIndex {
    #[serde(rename = "sitemap", default)]
    sitemaps: Vec<LocEntry>,
}

/// `<urlset>` document: a list of page URLs
#[derive(Debug, Deserialize)]
struct UrlSet {
    #[serde(rename = "url", default)]
    urls: Vec<LocEntry>,
}

/// A `<sitemap>` or `<url>` element; only `<loc>` is of interest
#[derive(Debug, Deserialize)]
struct LocEntry {
    loc: Option<String>,
}

/// Resolves a sitemap URL into the flat list of page URLs it reaches
///
/// # Arguments
///
/// * `client` - HTTP client for sitemap fetches (metadata timeout)
/// * `sitemap_url` - The sitemap document to resolve
/// * `visited` - Sitemap URLs already processed in this resolution tree;
///   a URL present here is skipped without re-fetching (cycle guard)
///
/// # Returns
///
/// The page URLs collected from this node and, for indexes, all child nodes.
/// Failures contribute an empty list rather than an error.
pub fn resolve_sitemap<'a>(
    client: &'a Client,
    sitemap_url: &'a str,
    visited: &'a mut HashSet<String>,
) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + 'a>> {
    Box::pin(async move {
        if !visited.insert(sitemap_url.to_string()) {
            tracing::debug!("Skipping already-visited sitemap: {}", sitemap_url);
            return Vec::new();
        }

        let body = match fetch_text(client, sitemap_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Sitemap fetch failed for {}: {}", sitemap_url, e);
                return Vec::new();
            }
        };

        if is_sitemap_index(&body) {
            let children = parse_index(&body);
            tracing::debug!(
                "Sitemap index {} references {} child sitemaps",
                sitemap_url,
                children.len()
            );
            let mut urls = Vec::new();
            for child in children {
                urls.extend(resolve_sitemap(client, &child, visited).await);
            }
            urls
        } else {
            parse_urlset(&body)
        }
    })
}

/// Returns true when the document is a sitemap index rather than a urlset
fn is_sitemap_index(xml: &str) -> bool {
    xml.contains("<sitemapindex")
}

/// Extracts child sitemap locations from a `<sitemapindex>` document
fn parse_index(xml: &str) -> Vec<String> {
    match quick_xml::de::from_str::<SitemapIndex>(xml) {
        Ok(index) => index
            .sitemaps
            .into_iter()
            .filter_map(|e| e.loc)
            .map(|loc| loc.trim().to_string())
            .filter(|loc| !loc.is_empty())
            .collect(),
        Err(e) => {
            tracing::debug!("Malformed sitemap index: {}", e);
            Vec::new()
        }
    }
}

/// Extracts page URLs from a `<urlset>` document
fn parse_urlset(xml: &str) -> Vec<String> {
    match quick_xml::de::from_str::<UrlSet>(xml) {
        Ok(urlset) => urlset
            .urls
            .into_iter()
            .filter_map(|e| e.loc)
            .map(|loc| loc.trim().to_string())
            .filter(|loc| !loc.is_empty())
            .collect(),
        Err(e) => {
            tracing::debug!("Malformed sitemap: {}", e);
            Vec::new()
        }
    }
}
