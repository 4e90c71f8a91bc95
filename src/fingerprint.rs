//! Technology fingerprinting
//!
//! Best-effort detection of the products behind a website, from response
//! headers and markup markers. Raw signature names are mapped through an
//! alias table to human-readable names and then sorted into categories.
//!
//! The categorization is first-match-wins over the category table, and a
//! name matches a category entry when either string contains the other.
//! These exact semantics (including the substring quirk) are a compatibility
//! contract with existing output; do not "improve" the matcher.
//!
//! Every internal failure degrades to an empty result; detection never
//! aborts an analysis.

use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::{BTreeMap, BTreeSet};

/// Raw technology name aliases, mapping signature names to the simplified
/// names used in reports
const TECH_ALIASES: &[(&str, &str)] = &[
    // Cloud hosting providers
    ("Amazon EC2", "AWS"),
    ("Amazon S3", "AWS S3"),
    ("Amazon CloudFront", "AWS CloudFront"),
    ("Amazon Web Services", "AWS"),
    ("Google Cloud", "Google Cloud Platform (GCP)"),
    ("Google Cloud CDN", "GCP"),
    ("Firebase", "Firebase (GCP)"),
    ("Microsoft Azure", "Microsoft Azure"),
    ("Hetzner", "Hetzner Cloud"),
    // Web servers
    ("nginx", "Nginx"),
    ("Apache", "Apache"),
    ("Microsoft-IIS", "Microsoft IIS"),
    ("LiteSpeed", "LiteSpeed"),
    ("Caddy", "Caddy"),
    // Frameworks
    ("Express", "Express.js"),
    ("Next.js", "Next.js"),
    ("Nuxt", "Nuxt.js"),
    ("Ruby on Rails", "Ruby on Rails"),
];

/// Category membership lists, walked in order; a technology lands in the
/// first category whose list matches it by bidirectional substring
const TECH_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "hosting",
        &[
            "AWS",
            "GCP",
            "Azure",
            "Vercel",
            "Netlify",
            "Cloudflare",
            "Railway",
            "Render",
            "Fly.io",
            "Heroku",
            "DigitalOcean",
            "Linode",
            "Vultr",
            "Hetzner",
            "Oracle Cloud",
            "GitHub Pages",
            "GitLab Pages",
            "WordPress",
            "Wix",
            "Squarespace",
            "Shopify",
            "Webflow",
        ],
    ),
    (
        "cdn",
        &[
            "Cloudflare",
            "Fastly",
            "Akamai",
            "BunnyCDN",
            "KeyCDN",
            "AWS CloudFront",
            "Azure CDN",
        ],
    ),
    (
        "server",
        &["Nginx", "Apache", "Microsoft IIS", "LiteSpeed", "Caddy"],
    ),
    (
        "framework",
        &[
            "Next.js",
            "React",
            "Vue.js",
            "Angular",
            "Svelte",
            "Nuxt.js",
            "Gatsby",
            "Django",
            "Flask",
            "Ruby on Rails",
            "Laravel",
            "Express.js",
            "FastAPI",
        ],
    ),
    ("database", &["PlanetScale", "Supabase", "Neon", "Firebase"]),
];

/// Body markers: substring of the markup mapped to a technology name
const BODY_MARKERS: &[(&str, &str)] = &[
    ("wp-content", "WordPress"),
    ("__NEXT_DATA__", "Next.js"),
    ("data-reactroot", "React"),
    ("ng-version=", "Angular"),
    ("__NUXT__", "Nuxt"),
    ("___gatsby", "Gatsby"),
    ("cdn.shopify.com", "Shopify"),
    ("static.wixstatic.com", "Wix"),
    ("squarespace.com", "Squarespace"),
    ("assets.website-files.com", "Webflow"),
    ("csrfmiddlewaretoken", "Django"),
];

/// Header presence markers: header name mapped to a technology name
const HEADER_MARKERS: &[(&str, &str)] = &[
    ("cf-ray", "Cloudflare"),
    ("x-vercel-id", "Vercel"),
    ("x-nf-request-id", "Netlify"),
    ("x-amz-cf-id", "Amazon CloudFront"),
    ("x-github-request-id", "GitHub Pages"),
    ("x-shopify-stage", "Shopify"),
];

/// Detects the technologies behind a URL, best-effort
///
/// Fetches the page once and inspects response headers plus markup markers.
/// Any internal failure (unreachable page, bad status) yields an empty map.
///
/// # Arguments
///
/// * `client` - HTTP client to fetch the page with
/// * `url` - The page to fingerprint
///
/// # Returns
///
/// Category name mapped to sorted technology names; empty categories omitted
pub async fn detect_technologies(client: &Client, url: &str) -> BTreeMap<String, Vec<String>> {
    let response = match client.get(url).send().await {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            tracing::debug!("Technology detection got status {} for {}", r.status(), url);
            return BTreeMap::new();
        }
        Err(e) => {
            tracing::debug!("Technology detection failed for {}: {}", url, e);
            return BTreeMap::new();
        }
    };

    let mut raw_names = Vec::new();

    // Header-derived signatures
    if let Some(server) = header_value(&response, "server") {
        raw_names.extend(match_server_header(&server));
    }
    if let Some(powered) = header_value(&response, "x-powered-by") {
        raw_names.extend(match_powered_by_header(&powered));
    }
    for (header, tech) in HEADER_MARKERS {
        if response.headers().contains_key(*header) {
            raw_names.push(tech.to_string());
        }
    }

    // Body-derived signatures
    if let Ok(body) = response.text().await {
        for (marker, tech) in BODY_MARKERS {
            if body.contains(marker) {
                raw_names.push(tech.to_string());
            }
        }
        if let Some(generator) = meta_generator(&body) {
            raw_names.push(generator);
        }
    }

    categorize_technologies(&raw_names)
}

/// Maps raw names through the alias table and buckets them by category
///
/// A name matches a category entry when the entry is a substring of the name
/// or the name is a substring of the entry; the first matching category in
/// table order wins. Unmatched names land in `other`.
pub fn categorize_technologies(raw_names: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut buckets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for raw in raw_names {
        let simplified = TECH_ALIASES
            .iter()
            .find(|(from, _)| from == raw)
            .map(|(_, to)| to.to_string())
            .unwrap_or_else(|| raw.clone());

        let category = TECH_CATEGORIES
            .iter()
            .find(|(_, members)| {
                members
                    .iter()
                    .any(|m| simplified.contains(m) || m.contains(simplified.as_str()))
            })
            .map(|(name, _)| *name)
            .unwrap_or("other");

        buckets.entry(category.to_string()).or_default().insert(simplified);
    }

    buckets
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(category, names)| (category, names.into_iter().collect()))
        .collect()
}

fn header_value(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

fn match_server_header(value: &str) -> Vec<String> {
    let lower = value.to_lowercase();
    let mut names = Vec::new();
    if lower.contains("nginx") {
        names.push("nginx".to_string());
    }
    if lower.contains("apache") {
        names.push("Apache".to_string());
    }
    if lower.contains("cloudflare") {
        names.push("Cloudflare".to_string());
    }
    if lower.contains("microsoft-iis") {
        names.push("Microsoft-IIS".to_string());
    }
    if lower.contains("litespeed") {
        names.push("LiteSpeed".to_string());
    }
    if lower.contains("caddy") {
        names.push("Caddy".to_string());
    }
    names
}

fn match_powered_by_header(value: &str) -> Vec<String> {
    let lower = value.to_lowercase();
    let mut names = Vec::new();
    if lower.contains("express") {
        names.push("Express".to_string());
    }
    if lower.contains("next.js") {
        names.push("Next.js".to_string());
    }
    if lower.contains("php") {
        names.push("PHP".to_string());
    }
    if lower.contains("asp.net") {
        names.push("ASP.NET".to_string());
    }
    names
}

/// Reads the `<meta name="generator">` content, first word only
fn meta_generator(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[name="generator"][content]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(|content| content.split_whitespace().next())
        .map(|word| word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_alias_mapping() {
        let result = categorize_technologies(&names(&["nginx"]));
        assert_eq!(result.get("server"), Some(&vec!["Nginx".to_string()]));
    }

    #[test]
    fn test_first_category_wins() {
        // "Cloudflare" is listed under both hosting and cdn; hosting comes
        // first in the table so it always lands there
        let result = categorize_technologies(&names(&["Cloudflare"]));
        assert!(result.contains_key("hosting"));
        assert!(!result.contains_key("cdn"));
    }

    #[test]
    fn test_bidirectional_substring_match() {
        // "AWS CloudFront" contains the hosting entry "AWS", so the hosting
        // rule claims it before the cdn rule is consulted
        let result = categorize_technologies(&names(&["Amazon CloudFront"]));
        assert_eq!(
            result.get("hosting"),
            Some(&vec!["AWS CloudFront".to_string()])
        );
    }

    #[test]
    fn test_unknown_goes_to_other() {
        let result = categorize_technologies(&names(&["Quux Analytics"]));
        assert_eq!(
            result.get("other"),
            Some(&vec!["Quux Analytics".to_string()])
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = categorize_technologies(&names(&["nginx", "nginx"]));
        assert_eq!(result.get("server"), Some(&vec!["Nginx".to_string()]));
    }

    #[test]
    fn test_names_sorted_within_category() {
        let result = categorize_technologies(&names(&["WordPress", "Netlify"]));
        assert_eq!(
            result.get("hosting"),
            Some(&vec!["Netlify".to_string(), "WordPress".to_string()])
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(categorize_technologies(&[]).is_empty());
    }

    #[test]
    fn test_server_header_matching() {
        assert_eq!(match_server_header("nginx/1.25.3"), vec!["nginx"]);
        assert_eq!(
            match_server_header("Apache/2.4.57 (Ubuntu)"),
            vec!["Apache"]
        );
        assert!(match_server_header("unknown-thing").is_empty());
    }

    #[test]
    fn test_meta_generator_first_word() {
        let html = r#"<html><head><meta name="generator" content="WordPress 6.4.2"></head></html>"#;
        assert_eq!(meta_generator(html), Some("WordPress".to_string()));
    }

    #[test]
    fn test_meta_generator_absent() {
        assert_eq!(meta_generator("<html><head></head></html>"), None);
    }
}
