//! Site analysis orchestration
//!
//! One [`SiteAnalyzer::analyze`] call runs the full pipeline for a single
//! site: main-page fetch, metadata discovery, URL frontier, categorization,
//! priority selection, per-page content aggregation, technology detection,
//! and a single text-generation call. Only two failures are fatal for a
//! site: an unreachable main page and a failed generation. Everything else
//! degrades to "less content".

mod metadata;
mod prompt;

pub use metadata::{discover_metadata_files, MetadataFile, METADATA_PATHS};
pub use prompt::build_prompt;

use crate::classify::{categorize_urls, select_priority_urls, Category};
use crate::config::Config;
use crate::content::extract_text;
use crate::crawler::{build_metadata_client, build_page_client, discover_urls, fetch_text};
use crate::fingerprint::detect_technologies;
use crate::generator::TextGenerator;
use crate::url::normalize_site_url;
use crate::{Result, SitescopeError};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of one site analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResult {
    /// The analyzed site URL (normalized)
    pub url: String,
    /// Total URLs discovered by the frontier
    pub total_urls_discovered: usize,
    /// The priority URLs selected for deep analysis
    pub priority_urls_analyzed: Vec<String>,
    /// Names of the well-known metadata files found
    pub metadata_files_found: Vec<String>,
    /// Per-category URL counts, non-empty categories only
    pub url_categories: BTreeMap<Category, usize>,
    /// Detected technologies by category, best-effort
    pub technologies: BTreeMap<String, Vec<String>>,
    /// The generated company profile
    pub analysis: String,
    /// When the analysis finished
    pub generated_at: DateTime<Utc>,
}

/// Analyzes a single site end to end
pub struct SiteAnalyzer<'a, G> {
    config: &'a Config,
    generator: &'a G,
    page_client: Client,
    metadata_client: Client,
}

impl<'a, G: TextGenerator> SiteAnalyzer<'a, G> {
    /// Creates an analyzer with clients built from the configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Pipeline configuration
    /// * `generator` - The text-generation backend
    ///
    /// # Returns
    ///
    /// * `Ok(SiteAnalyzer)` - Ready-to-use analyzer
    /// * `Err(SitescopeError)` - HTTP client construction failed
    pub fn new(config: &'a Config, generator: &'a G) -> Result<Self> {
        Ok(Self {
            config,
            generator,
            page_client: build_page_client(&config.fetch)?,
            metadata_client: build_metadata_client(&config.fetch)?,
        })
    }

    /// Runs the full analysis pipeline for one site
    ///
    /// # Arguments
    ///
    /// * `raw_url` - The site identifier; the scheme defaults to `https`
    ///   when missing
    ///
    /// # Returns
    ///
    /// * `Ok(SiteResult)` - Completed analysis
    /// * `Err(SitescopeError)` - Main page unreachable, or generation failed
    pub async fn analyze(&self, raw_url: &str) -> Result<SiteResult> {
        let base_url = normalize_site_url(raw_url)?;
        tracing::info!("Analyzing website: {}", base_url);

        // Main page is the one fetch that must succeed
        let main_html = fetch_text(&self.page_client, base_url.as_str())
            .await
            .map_err(|e| SitescopeError::MainPageUnreachable {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;
        let main_content = extract_text(&main_html, self.config.selection.main_content_chars);

        let technologies = detect_technologies(&self.page_client, base_url.as_str()).await;
        if !technologies.is_empty() {
            tracing::info!(
                "Detected {} technologies",
                technologies.values().map(Vec::len).sum::<usize>()
            );
        }

        tracing::info!("Discovering metadata files...");
        let metadata = discover_metadata_files(
            &self.metadata_client,
            &base_url,
            self.config.selection.metadata_content_chars,
        )
        .await;
        if !metadata.is_empty() {
            tracing::info!(
                "Found metadata files: {}",
                metadata
                    .iter()
                    .map(|f| f.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        tracing::info!("Discovering site URLs...");
        let all_urls = discover_urls(&self.metadata_client, &base_url, &main_html).await;
        tracing::info!("Found {} total URLs", all_urls.len());

        let categorized = categorize_urls(&all_urls);
        for (category, count) in categorized.counts() {
            tracing::debug!("{}: {} URLs", category, count);
        }

        let priority_urls =
            select_priority_urls(&categorized, self.config.selection.max_priority_urls);
        tracing::info!("Selected {} priority URLs for analysis", priority_urls.len());

        // Aggregate labeled content: main page, metadata files, then each
        // priority page. Individual page failures are skipped, not fatal.
        let mut sections = vec![format!("MAIN PAGE CONTENT:\n{}", main_content)];

        if !metadata.is_empty() {
            let files = metadata
                .iter()
                .map(|f| format!("{}:\n{}", f.name.to_uppercase(), f.content))
                .collect::<Vec<_>>()
                .join("\n\n");
            sections.push(format!("METADATA FILES:\n{}", files));
        }

        let mut pages_analyzed = 1;
        for (i, page_url) in priority_urls.iter().enumerate() {
            tracing::debug!(
                "Fetching priority page {}/{}: {}",
                i + 1,
                priority_urls.len(),
                page_url
            );
            match fetch_text(&self.page_client, page_url).await {
                Ok(html) => {
                    let text = extract_text(&html, self.config.selection.page_content_chars);
                    if !text.is_empty() {
                        sections.push(format!("PAGE: {}\n{}", page_url, text));
                        pages_analyzed += 1;
                    }
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", page_url, e);
                }
            }
        }

        let divider = format!("\n\n{}\n\n", "=".repeat(50));
        let combined_content = sections.join(divider.as_str());

        let prompt = build_prompt(
            base_url.as_str(),
            all_urls.len(),
            pages_analyzed,
            &combined_content,
        );

        tracing::info!("Generating profile via {}", self.generator.label());
        let analysis = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| SitescopeError::Generation {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(SiteResult {
            url: base_url.to_string(),
            total_urls_discovered: all_urls.len(),
            priority_urls_analyzed: priority_urls,
            metadata_files_found: metadata.iter().map(|f| f.name.to_string()).collect(),
            url_categories: categorized.counts(),
            technologies,
            analysis,
            generated_at: Utc::now(),
        })
    }
}
