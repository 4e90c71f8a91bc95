//! Crawl discovery module
//!
//! This module covers everything that discovers URLs for a site:
//! - HTTP client construction and page fetching
//! - Sitemap resolution (including recursive sitemap indexes)
//! - Same-domain link extraction from page markup
//! - The URL frontier that merges both sources into a deduplicated set

mod fetcher;
mod frontier;
mod links;
mod sitemap;

pub use fetcher::{build_metadata_client, build_page_client, fetch_text, FetchError};
pub use frontier::discover_urls;
pub use links::extract_same_domain_links;
pub use sitemap::resolve_sitemap;
