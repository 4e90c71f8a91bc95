use crate::UrlError;
use url::Url;

/// Normalizes a raw site identifier into an absolute URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Default the scheme to `https://` when none is present
/// 3. Parse the result; reject if malformed
/// 4. Reject schemes other than HTTP and HTTPS
/// 5. Require a host
///
/// URL identity downstream is the exact string produced here; no further
/// rewriting (path cleanup, query stripping) is applied, so the same input
/// always maps to the same discovered URL.
///
/// # Arguments
///
/// * `raw` - The URL string as supplied by the user or worklist
///
/// # Returns
///
/// * `Ok(Url)` - Normalized absolute URL
/// * `Err(UrlError)` - Failed to parse or validate the URL
///
/// # Examples
///
/// ```
/// use sitescope::url::normalize_site_url;
///
/// let url = normalize_site_url("example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
///
/// let url = normalize_site_url("http://example.com/about").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/about");
/// ```
pub fn normalize_site_url(raw: &str) -> Result<Url, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    // Default scheme to https when missing
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}
