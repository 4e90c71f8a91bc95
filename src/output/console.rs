//! Formatted console reports

use crate::analyzer::SiteResult;
use crate::batch::BatchSummary;
use std::path::Path;

/// Prints the formatted single-site analysis report
///
/// # Arguments
///
/// * `result` - The analysis to present
/// * `saved_to` - Where the JSON record was written
pub fn print_site_report(result: &SiteResult, saved_to: &Path) {
    let bar = "=".repeat(80);

    println!("\n{}", bar);
    println!("COMPREHENSIVE WEBSITE ANALYSIS");
    println!("{}", bar);
    println!("Website: {}", result.url);
    println!("URLs Discovered: {}", result.total_urls_discovered);
    println!(
        "Priority Pages Analyzed: {}",
        result.priority_urls_analyzed.len()
    );
    if !result.metadata_files_found.is_empty() {
        println!("Metadata Files: {}", result.metadata_files_found.join(", "));
    }

    if !result.technologies.is_empty() {
        println!("\nDETECTED TECHNOLOGIES:");
        for (category, names) in &result.technologies {
            println!(
                "  {}: {}",
                category.to_uppercase().replace('_', " "),
                names.join(", ")
            );
        }
    }

    println!("\n{}", "-".repeat(80));
    println!("{}", result.analysis);
    println!("\n{}", bar);
    println!("Analysis saved to: {}", saved_to.display());
}

/// Prints the batch summary
///
/// # Arguments
///
/// * `summary` - The finished batch's accounting
pub fn print_batch_summary(summary: &BatchSummary) {
    println!("\n=== Batch Summary ===");
    println!("Attempted: {}", summary.attempted);
    println!("Completed: {}", summary.completed);
    println!("Failed:    {}", summary.failed);

    if !summary.failed_urls.is_empty() {
        println!("\nFailed sites:");
        for url in &summary.failed_urls {
            println!("  - {}", url);
        }
    }
}
