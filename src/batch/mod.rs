//! Batch orchestration module
//!
//! Drives the site analyzer over an ordered worklist with checkpointed
//! resumability: completed sites are flushed to durable storage immediately,
//! interrupts flush before exit, and a finished batch deletes its checkpoint
//! and writes a summary.

mod checkpoint;
mod orchestrator;

pub use checkpoint::Checkpoint;
pub use orchestrator::{BatchOrchestrator, BatchOutcome, BatchSummary};

use crate::{Result, SitescopeError};
use std::path::Path;

/// Loads a worklist file: one site URL per line
///
/// Blank lines and `#` comment lines are ignored. Duplicates are allowed
/// here; the orchestrator deduplicates before processing.
///
/// # Arguments
///
/// * `path` - Path to the worklist file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Site URLs in file order
/// * `Err(SitescopeError)` - Unreadable file or no usable entries
pub fn load_worklist(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;

    let sites: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if sites.is_empty() {
        return Err(SitescopeError::Worklist(format!(
            "no site URLs found in {}",
            path.display()
        )));
    }

    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn worklist_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_worklist_preserves_order() {
        let file = worklist_file("b.com\na.com\nc.com\n");
        let sites = load_worklist(file.path()).unwrap();
        assert_eq!(sites, vec!["b.com", "a.com", "c.com"]);
    }

    #[test]
    fn test_load_worklist_skips_comments_and_blanks() {
        let file = worklist_file("# header\n\na.com\n  \n# another\nb.com\n");
        let sites = load_worklist(file.path()).unwrap();
        assert_eq!(sites, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_load_worklist_keeps_duplicates() {
        let file = worklist_file("a.com\na.com\n");
        let sites = load_worklist(file.path()).unwrap();
        assert_eq!(sites.len(), 2);
    }

    #[test]
    fn test_empty_worklist_is_an_error() {
        let file = worklist_file("# nothing here\n");
        assert!(load_worklist(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_worklist(Path::new("/nonexistent/worklist.txt")).is_err());
    }
}
