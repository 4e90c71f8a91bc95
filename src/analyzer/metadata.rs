//! Well-known metadata file discovery
//!
//! Probes the fixed list of well-known paths a site may publish next to its
//! pages. Every probe is independently optional: absence of any or all files
//! is normal, and a failed probe contributes nothing.

use crate::crawler::fetch_text;
use reqwest::Client;
use url::Url;

/// Well-known metadata files, probed in this order
pub const METADATA_PATHS: &[(&str, &str)] = &[
    ("robots.txt", "/robots.txt"),
    ("sitemap.xml", "/sitemap.xml"),
    ("sitemap_index.xml", "/sitemap_index.xml"),
    ("humans.txt", "/humans.txt"),
    ("llms.txt", "/llms.txt"),
    ("ai.txt", "/ai.txt"),
    ("security.txt", "/.well-known/security.txt"),
];

/// A metadata file found on the site
#[derive(Debug, Clone)]
pub struct MetadataFile {
    /// Well-known file name (e.g. `robots.txt`)
    pub name: &'static str,
    /// The URL the file was fetched from
    pub url: String,
    /// File content, truncated to the configured cap
    pub content: String,
}

/// Probes the well-known metadata paths for a site
///
/// # Arguments
///
/// * `client` - HTTP client (metadata timeout)
/// * `base_url` - The site's main page URL; probes are resolved against its
///   origin
/// * `max_chars` - Cap on kept content per file
///
/// # Returns
///
/// The files that responded successfully, in probe order
pub async fn discover_metadata_files(
    client: &Client,
    base_url: &Url,
    max_chars: usize,
) -> Vec<MetadataFile> {
    let mut found = Vec::new();

    for (name, path) in METADATA_PATHS {
        let Ok(probe_url) = base_url.join(path) else {
            continue;
        };

        match fetch_text(client, probe_url.as_str()).await {
            Ok(content) => {
                tracing::debug!("Found metadata file {} at {}", name, probe_url);
                found.push(MetadataFile {
                    name,
                    url: probe_url.to_string(),
                    content: truncate_chars(content, max_chars),
                });
            }
            Err(e) => {
                tracing::trace!("No {} for {}: {}", name, base_url, e);
            }
        }
    }

    found
}

fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}
