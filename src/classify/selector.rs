//! Priority URL selection
//!
//! Allocates the bounded, ordered subset of URLs submitted for deep content
//! analysis. The walk order and per-category caps are fixed: the result is a
//! stable prefix of the priority-table walk, never discovery order.

use crate::classify::category::{CategorizedSet, Category};

/// Default overall cap on selected URLs
pub const DEFAULT_MAX_PRIORITY_URLS: usize = 15;

/// Category walk order with per-category caps. Categories absent from this
/// table (testimonials, contact, careers, news, other) are never selected.
const PRIORITY_TABLE: &[(Category, usize)] = &[
    (Category::Homepage, 1),
    (Category::About, 2),
    (Category::Products, 3),
    (Category::Services, 2),
    (Category::Pricing, 2),
    (Category::CaseStudies, 2),
    (Category::Blog, 3),
    (Category::Team, 1),
    (Category::Resources, 1),
];

/// Selects the priority URLs for deep analysis
///
/// Walks the priority table, taking up to each category's cap from that
/// category's bucket (in insertion order) and appending to the result. The
/// walk stops once the accumulated length reaches `max_urls`; the category
/// being appended when the limit is crossed is still appended in full before
/// the check, then the whole list is truncated to `max_urls`.
///
/// # Arguments
///
/// * `categorized` - The categorized URL set
/// * `max_urls` - Overall cap on the result length
///
/// # Returns
///
/// At most `max_urls` URLs in priority-table order; stable across repeated
/// calls with identical input
pub fn select_priority_urls(categorized: &CategorizedSet, max_urls: usize) -> Vec<String> {
    let mut selected = Vec::new();

    for (category, cap) in PRIORITY_TABLE {
        selected.extend(
            categorized
                .get(*category)
                .iter()
                .take(*cap)
                .cloned(),
        );
        if selected.len() >= max_urls {
            break;
        }
    }

    selected.truncate(max_urls);
    selected
}
