//! Sitescope: a company website profiler
//!
//! This crate implements a crawl-discovery and analysis pipeline that maps a
//! company website's URLs, classifies them into topical buckets, selects a
//! bounded representative subset, and submits the aggregated page content to a
//! text-generation backend to produce a company profile. A batch layer drives
//! the analyzer over a worklist of sites with checkpointed resumability.

pub mod analyzer;
pub mod batch;
pub mod classify;
pub mod config;
pub mod content;
pub mod crawler;
pub mod fingerprint;
pub mod generator;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Sitescope operations
#[derive(Debug, Error)]
pub enum SitescopeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Could not fetch main page for {url}: {reason}")]
    MainPageUnreachable { url: String, reason: String },

    #[error("Text generation failed for {url}: {reason}")]
    Generation { url: String, reason: String },

    #[error("Generator backend error: {0}")]
    Generator(#[from] generator::GeneratorError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Worklist error: {0}")]
    Worklist(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Sitescope operations
pub type Result<T> = std::result::Result<T, SitescopeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analyzer::{SiteAnalyzer, SiteResult};
pub use batch::{BatchOrchestrator, BatchOutcome, BatchSummary, Checkpoint};
pub use classify::{categorize_urls, select_priority_urls, CategorizedSet, Category};
pub use config::Config;
pub use generator::TextGenerator;
pub use crate::url::{extract_domain, normalize_site_url};
