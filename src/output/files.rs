//! JSON result persistence

use crate::analyzer::SiteResult;
use crate::batch::BatchSummary;
use crate::Result;
use std::path::{Path, PathBuf};
use url::Url;

/// File name of the aggregate batch summary record
pub const BATCH_SUMMARY_FILE: &str = "batch_summary.json";

/// Derives the per-site result file name from the site URL
///
/// The domain's dots become underscores: `https://example.com/` maps to
/// `analysis_example_com.json`. URLs without a parsable host fall back to a
/// sanitized form of the whole identifier.
pub fn result_file_name(site_url: &str) -> String {
    let stem = Url::parse(site_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| site_url.to_string());

    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("analysis_{}.json", sanitized)
}

/// Writes one site's result record
///
/// # Arguments
///
/// * `dir` - Output directory (must exist)
/// * `result` - The result to persist
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(SitescopeError)` - Serialization or IO failure
pub fn write_site_result(dir: &Path, result: &SiteResult) -> Result<PathBuf> {
    let path = dir.join(result_file_name(&result.url));
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&path, json)?;
    tracing::info!("Analysis saved to {}", path.display());
    Ok(path)
}

/// Writes the aggregate batch summary record
///
/// # Arguments
///
/// * `dir` - Output directory (must exist)
/// * `summary` - The summary to persist
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(SitescopeError)` - Serialization or IO failure
pub fn write_batch_summary(dir: &Path, summary: &BatchSummary) -> Result<PathBuf> {
    let path = dir.join(BATCH_SUMMARY_FILE);
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(&path, json)?;
    tracing::info!("Batch summary saved to {}", path.display());
    Ok(path)
}
