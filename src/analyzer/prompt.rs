//! Analysis prompt composition

/// Builds the company-profile prompt submitted to the text generator
///
/// # Arguments
///
/// * `site_url` - The analyzed site
/// * `total_urls` - Count of discovered URLs
/// * `pages_analyzed` - Count of pages whose content was aggregated
/// * `combined_content` - The labeled aggregated text block
pub fn build_prompt(
    site_url: &str,
    total_urls: usize,
    pages_analyzed: usize,
    combined_content: &str,
) -> String {
    format!(
        r#"Analyze the following comprehensive website content and create two detailed summaries about this company:

Website: {site_url}
Total URLs discovered: {total_urls}
Pages analyzed: {pages_analyzed}

Content: {combined_content}

Please provide:

**EXECUTIVE SUMMARY:**
A concise overview covering:
1. What the company does (core business)
2. Key products/services offered
3. Target market/customers
4. Business model (if apparent)
5. Notable achievements or differentiators

**DETAILED SUMMARY:**
A comprehensive analysis including:
- Specific product features and pricing details
- Market positioning and competitive advantages
- Customer success stories or case studies mentioned
- Technology stack or methodologies used
- Company culture, team, or leadership insights
- Recent developments, partnerships, or initiatives
- Any unique processes or proprietary approaches
- Content themes and focus areas from blog/resources

Keep both summaries professional and factual.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs() {
        let prompt = build_prompt("https://example.com/", 42, 7, "CONTENT BLOCK");
        assert!(prompt.contains("Website: https://example.com/"));
        assert!(prompt.contains("Total URLs discovered: 42"));
        assert!(prompt.contains("Pages analyzed: 7"));
        assert!(prompt.contains("CONTENT BLOCK"));
    }

    #[test]
    fn test_prompt_asks_for_both_summaries() {
        let prompt = build_prompt("https://example.com/", 0, 0, "");
        assert!(prompt.contains("EXECUTIVE SUMMARY"));
        assert!(prompt.contains("DETAILED SUMMARY"));
    }
}
