//! Follower extraction from an exported snapshot document.
//!
//! The export page lists each follower as a hyperlink whose visible text is
//! the account handle. Surrounding UI chrome ("View profile", dates, section
//! headers) also appears as link text, so candidates pass a deliberately
//! permissive heuristic: non-empty, no space character, and strictly more
//! than two characters. The heuristic may admit non-handle tokens; that is
//! an accepted approximation, and extra set members only ever make a target
//! look *more* followed, never less.

use std::collections::HashSet;

use crate::document::Document;
use crate::{FollowbackError, Result};

/// The set of canonicalized handles extracted from one snapshot.
///
/// Lowercased for comparison; duplicates collapse on insertion. Created
/// fresh per extraction and consumed by one reconciliation.
pub type FollowerSet = HashSet<String>;

/// Minimum accepted handle length is strictly greater than this.
const MIN_HANDLE_LEN: usize = 2;

/// Extracts the normalized follower set from a snapshot document.
///
/// Scans every hyperlink in document order, keeps visible link texts that
/// look like handles, lowercases them, and collects them into a set.
///
/// # Errors
///
/// Returns [`FollowbackError::EmptyFollowerExtraction`] when no candidate
/// qualifies. An empty set never comes back as `Ok`: "nothing recognized"
/// almost always means the wrong file was uploaded, and treating it as a
/// valid empty result would report every target as non-mutual.
///
/// # Example
///
/// ```rust
/// use followback_core::extract_followers;
///
/// let html = r#"<a>jane_doe</a><a>View profile</a><a>ab</a>"#;
/// let followers = extract_followers(html).unwrap();
/// assert!(followers.contains("jane_doe"));
/// assert_eq!(followers.len(), 1);
/// ```
pub fn extract_followers(html: &str) -> Result<FollowerSet> {
    let doc = Document::parse(html);
    let followers = collect_candidates(&doc);

    if followers.is_empty() {
        return Err(FollowbackError::EmptyFollowerExtraction);
    }

    Ok(followers)
}

/// Walks the document's links and gathers qualifying handle candidates.
fn collect_candidates(doc: &Document) -> FollowerSet {
    let mut followers = FollowerSet::new();

    for link in doc.links() {
        let text = link.text();
        if is_handle_candidate(&text) {
            followers.insert(text.to_lowercase());
        }
    }

    followers
}

/// The snapshot heuristic: non-empty, no space, more than two characters.
///
/// Length is counted in characters, matching how the export viewer counts
/// string length, so multibyte handles are not penalized.
fn is_handle_candidate(text: &str) -> bool {
    !text.is_empty() && !text.contains(' ') && text.chars().count() > MIN_HANDLE_LEN
}
