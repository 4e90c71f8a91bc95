//! URL classification module
//!
//! Buckets discovered URLs into a closed set of topical categories and
//! selects the bounded priority subset used for deep content analysis.

mod category;
mod selector;

pub use category::{categorize_urls, CategorizedSet, Category};
pub use selector::{select_priority_urls, DEFAULT_MAX_PRIORITY_URLS};
