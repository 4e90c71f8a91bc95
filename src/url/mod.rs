//! URL handling module for Sitescope
//!
//! This module provides site URL normalization, domain extraction, and the
//! same-host comparison used when filtering discovered links.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{extract_domain, same_host};
pub use normalize::normalize_site_url;
