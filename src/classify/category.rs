//! URL categorization
//!
//! Classifies each URL into exactly one topical bucket using path-keyword
//! rules evaluated in a fixed order. The rule order is a compatibility
//! contract: the first matching rule wins and later rules are never
//! consulted, so reordering changes classification output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Topical bucket for a discovered URL
///
/// `Other` is the fallback; a classified URL always lands in exactly one
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Homepage,
    About,
    Products,
    Services,
    Blog,
    CaseStudies,
    Testimonials,
    Pricing,
    Contact,
    Team,
    Careers,
    News,
    Resources,
    Other,
}

impl Category {
    /// Snake-case name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Category::Homepage => "homepage",
            Category::About => "about",
            Category::Products => "products",
            Category::Services => "services",
            Category::Blog => "blog",
            Category::CaseStudies => "case_studies",
            Category::Testimonials => "testimonials",
            Category::Pricing => "pricing",
            Category::Contact => "contact",
            Category::Team => "team",
            Category::Careers => "careers",
            Category::News => "news",
            Category::Resources => "resources",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Paths that classify as the homepage, by literal equality
const HOMEPAGE_PATHS: &[&str] = &["/", "/home", "/index"];

/// Keyword rules, evaluated in order after the homepage check. A rule
/// matches when the lowercased path contains any of its keywords.
const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (Category::About, &["about", "company", "who-we-are"]),
    (Category::Products, &["product", "solution"]),
    (Category::Services, &["service", "offering"]),
    (Category::Blog, &["blog", "article", "post"]),
    (Category::CaseStudies, &["case-stud", "success", "customer"]),
    (Category::Testimonials, &["testimonial", "review"]),
    (Category::Pricing, &["pricing", "price", "plan"]),
    (Category::Contact, &["contact", "reach"]),
    (Category::Team, &["team", "people", "staff"]),
    (Category::Careers, &["career", "job", "hiring"]),
    (Category::News, &["news", "press"]),
    (Category::Resources, &["resource", "download", "guide"]),
];

/// URLs grouped by category, each group in discovery (insertion) order
///
/// Every URL passed to [`categorize_urls`] appears in exactly one group.
#[derive(Debug, Default, Clone)]
pub struct CategorizedSet {
    buckets: BTreeMap<Category, Vec<String>>,
}

impl CategorizedSet {
    /// URLs in the given category, in insertion order
    pub fn get(&self, category: Category) -> &[String] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Per-category URL counts, non-empty categories only
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        self.buckets
            .iter()
            .filter(|(_, urls)| !urls.is_empty())
            .map(|(category, urls)| (*category, urls.len()))
            .collect()
    }

    /// Total number of categorized URLs
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    fn insert(&mut self, category: Category, url: String) {
        self.buckets.entry(category).or_default().push(url);
    }
}

/// Classifies a URL by its path
///
/// The lowercased path is tested against the homepage literals first, then
/// against each keyword rule in the fixed order; the first match wins.
/// URLs that fail to parse fall back to `Other`.
pub fn categorize_url(url: &str) -> Category {
    let Ok(parsed) = Url::parse(url) else {
        return Category::Other;
    };
    let path = parsed.path().to_lowercase();

    if HOMEPAGE_PATHS.contains(&path.as_str()) {
        return Category::Homepage;
    }

    for (category, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| path.contains(keyword)) {
            return *category;
        }
    }

    Category::Other
}

/// Categorizes a list of discovered URLs
///
/// # Arguments
///
/// * `urls` - The discovered URLs, in discovery order
///
/// # Returns
///
/// A [`CategorizedSet`] with every input URL in exactly one bucket,
/// preserving discovery order within each bucket
pub fn categorize_urls<S: AsRef<str>>(urls: &[S]) -> CategorizedSet {
    let mut set = CategorizedSet::default();
    for url in urls {
        let url = url.as_ref();
        set.insert(categorize_url(url), url.to_string());
    }
    set
}
