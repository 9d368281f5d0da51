//! Non-mutual reconciliation between a target list and a follower set.
//!
//! Pure engine: no I/O, no shared state, reentrant. Comparison is
//! case-insensitive throughout, output keeps the target list's casing and
//! relative order.

use crate::extract::{FollowerSet, extract_followers};
use crate::handle::canonical;
use crate::{FollowbackError, Result};

/// Computes the targets that do not appear in the follower set.
///
/// Iterates `target_list` in its given order and keeps each entry (original
/// casing) whose lowercase form is neither the caller's own identifier nor a
/// member of `followers`. The output is a subsequence of `target_list`: no
/// sorting, and no deduplication beyond whatever uniqueness the list already
/// has. An empty `target_list` is a valid no-op producing an empty result.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use followback_core::compute_non_mutual;
///
/// let targets = vec!["Alice".to_string(), "bob".to_string(), "carol".to_string()];
/// let followers: HashSet<String> = ["carol".to_string()].into();
///
/// let result = compute_non_mutual(&targets, &followers, "alice");
/// assert_eq!(result, vec!["bob"]); // Alice is self, carol follows back
/// ```
pub fn compute_non_mutual(target_list: &[String], followers: &FollowerSet, own_id: &str) -> Vec<String> {
    let own_id_lower = canonical(own_id);

    target_list
        .iter()
        .filter(|target| {
            let target_lower = target.to_lowercase();
            target_lower != own_id_lower && !followers.contains(&target_lower)
        })
        .cloned()
        .collect()
}

/// Runs extraction and reconciliation as one pure call.
///
/// This is the explicit-state entry point the application shell uses:
/// everything the computation depends on is a parameter, and every outcome
/// is a discriminated result.
///
/// # Errors
///
/// - [`FollowbackError::EmptyFollowerExtraction`] when the snapshot yields
///   no candidates (reconciliation is blocked, see [`extract_followers`]).
/// - [`FollowbackError::EmptyTargetList`] when `target_list` has no entries,
///   so the caller cannot silently render "everyone follows back".
pub fn check_followers(html: &str, target_list: &[String], own_id: &str) -> Result<Vec<String>> {
    if target_list.is_empty() {
        return Err(FollowbackError::EmptyTargetList);
    }

    let followers = extract_followers(html)?;

    Ok(compute_non_mutual(target_list, &followers, own_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn followers(handles: &[&str]) -> FollowerSet {
        handles.iter().map(|h| h.to_string()).collect()
    }

    fn targets(handles: &[&str]) -> Vec<String> {
        handles.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_membership() {
        // Extraction lowercases, so "JaneDoe" arrives as "janedoe".
        let set = followers(&["janedoe"]);
        let list = targets(&["JaneDoe"]);

        let result = compute_non_mutual(&list, &set, "someone_else");
        assert!(result.is_empty());
    }

    #[test]
    fn test_self_excluded_regardless_of_follow_status() {
        let set = followers(&["carol"]);
        let list = targets(&["Alice", "bob"]);

        let result = compute_non_mutual(&list, &set, "alice");
        assert_eq!(result, vec!["bob"]);
    }

    #[test]
    fn test_self_exclusion_trims_own_id() {
        let set = followers(&["carol"]);
        let list = targets(&["Alice", "bob"]);

        let result = compute_non_mutual(&list, &set, "  ALICE ");
        assert_eq!(result, vec!["bob"]);
    }

    #[test]
    fn test_order_preserved() {
        let set = followers(&["unrelated"]);
        let list = targets(&["zeta", "alpha", "mike"]);

        let result = compute_non_mutual(&list, &set, "me");
        assert_eq!(result, vec!["zeta", "alpha", "mike"]);
    }

    #[test]
    fn test_output_keeps_original_casing() {
        let set = followers(&["unrelated"]);
        let list = targets(&["MixedCase", "lower"]);

        let result = compute_non_mutual(&list, &set, "me");
        assert_eq!(result, vec!["MixedCase", "lower"]);
    }

    #[test]
    fn test_duplicates_in_target_list_pass_through() {
        let set = followers(&["unrelated"]);
        let list = targets(&["dupe", "other", "dupe"]);

        let result = compute_non_mutual(&list, &set, "me");
        assert_eq!(result, vec!["dupe", "other", "dupe"]);
    }

    #[test]
    fn test_empty_target_list_is_noop_for_engine() {
        let set = followers(&["carol"]);
        let result = compute_non_mutual(&[], &set, "me");
        assert!(result.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let set = followers(&["carol", "bob"]);
        let list = targets(&["Alice", "bob", "dave"]);

        let first = compute_non_mutual(&list, &set, "eve");
        let second = compute_non_mutual(&list, &set, "eve");
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_followers_empty_targets() {
        let html = "<a>jane_doe</a>";
        let result = check_followers(html, &[], "me");
        assert!(matches!(result, Err(FollowbackError::EmptyTargetList)));
    }

    #[test]
    fn test_check_followers_empty_extraction() {
        let list = targets(&["jane_doe"]);
        let result = check_followers("<p>no links here</p>", &list, "me");
        assert!(matches!(result, Err(FollowbackError::EmptyFollowerExtraction)));
    }

    #[test]
    fn test_check_followers_end_to_end() {
        // Only bob_smith qualifies as a handle; carol99 is self.
        let html = r#"<a>x</a><a>Target One</a><a>bob_smith</a><a>al</a>"#;
        let list = targets(&["bob_smith", "carol99", "bob_smith"]);

        let result = check_followers(html, &list, "carol99").unwrap();
        assert!(result.is_empty());
    }
}
