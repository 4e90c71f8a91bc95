//! Page content extraction
//!
//! A pure formatting transform: turns fetched markup into the plain text that
//! is aggregated into the generation prompt. Boilerplate containers (scripts,
//! styles, navigation, header, footer) are dropped, whitespace is collapsed,
//! and the result is truncated to a character cap.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Subtrees excluded from extracted text
const STRIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Extracts readable plain text from page markup
///
/// # Arguments
///
/// * `html` - The page markup
/// * `max_chars` - Cap on the returned text length, in characters
///
/// # Returns
///
/// Whitespace-collapsed text with boilerplate subtrees removed, truncated
/// to `max_chars`. Empty input yields an empty string.
pub fn extract_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    let mut text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&mut text, max_chars);
    text
}

/// Walks the node tree, appending text while skipping stripped subtrees
fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                if STRIP_TAGS.contains(&element.name()) {
                    continue;
                }
                collect_text(child, out);
            }
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push(' ');
            }
            _ => {}
        }
    }
}

/// Truncates a string to at most `max` characters, on a char boundary
fn truncate_chars(s: &mut String, max: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
}
