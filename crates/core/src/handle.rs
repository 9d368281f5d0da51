//! Handle normalization and validation.
//!
//! Comparison between identifiers is always case-insensitive, but displayed
//! values keep the casing they arrived with. [`canonical`] produces the
//! comparison form; [`is_valid_handle`] is the admission filter applied to
//! remote target-list cells (never to extracted followers).

use regex::Regex;
use std::sync::LazyLock;

/// Platform handle shape: 3 to 30 characters, alphanumeric plus `.` and `_`.
static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._]{3,30}$").unwrap());

/// Produces the canonical comparison form of a handle.
///
/// Trims surrounding whitespace and lowercases. The stored display value is
/// never altered; canonicalization exists only for membership and equality
/// checks.
///
/// # Example
///
/// ```rust
/// use followback_core::handle::canonical;
///
/// assert_eq!(canonical("  Jane_Doe "), "jane_doe");
/// ```
pub fn canonical(handle: &str) -> String {
    handle.trim().to_lowercase()
}

/// Checks whether a string is shaped like a platform handle.
///
/// Used by the sheet collaborator to separate handle cells from headers,
/// notes, and empty cells in the remote tabular source. Extracted followers
/// are deliberately not run through this filter; the snapshot heuristic in
/// [`extract_followers`](crate::extract_followers) is the only gate there.
pub fn is_valid_handle(cell: &str) -> bool {
    HANDLE_RE.is_match(cell)
}
