//! Error types for followback operations.
//!
//! This module defines the main error type [`FollowbackError`] which
//! represents all possible errors that can occur during snapshot extraction,
//! target-list fetching, and reconciliation.
//!
//! # Example
//!
//! ```rust
//! use followback_core::{FollowbackError, Result, extract_followers};
//!
//! fn followers_from_upload(html: &str) -> Result<usize> {
//!     let set = extract_followers(html)?;
//!     Ok(set.len())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for follower reconciliation operations.
///
/// All variants are recoverable at the calling layer; the library never
/// logs, retries, or swallows an error itself. The caller owns user-visible
/// messaging.
///
/// # Example
///
/// ```rust
/// use followback_core::{FollowbackError, extract_followers};
///
/// match extract_followers("<html><body></body></html>") {
///     Ok(followers) => println!("found {} followers", followers.len()),
///     Err(FollowbackError::EmptyFollowerExtraction) => {
///         println!("no handles recognized; wrong file?");
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FollowbackError {
    /// No candidate handles were found in the uploaded snapshot.
    ///
    /// This is distinct from a user who truly has zero followers: an export
    /// page always carries at least one qualifying link. The usual cause is
    /// an unrelated HTML file or an unrecognized export format, so callers
    /// must block reconciliation and surface a message rather than report
    /// "everyone follows back".
    #[error("No follower handles were found in the uploaded document")]
    EmptyFollowerExtraction,

    /// The target list has zero entries at reconciliation time.
    ///
    /// Returned by [`check_followers`](crate::check_followers) so the caller
    /// cannot silently produce an empty result. The pure engine itself
    /// treats an empty list as a valid no-op.
    #[error("The target list is empty")]
    EmptyTargetList,

    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and other
    /// HTTP-level problems while fetching the published sheet.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the sheet host.
    #[error("Sheet host returned status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when the sheet fetch exceeds the configured timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid sheet URL provided.
    #[error("Invalid sheet URL: {0}")]
    InvalidUrl(String),

    /// The fetched payload could not be read as CSV.
    #[error("Failed to parse sheet CSV: {0}")]
    CsvError(#[from] csv::Error),

    /// No cached target list exists on disk.
    ///
    /// Returned by [`TargetCache::load`](crate::sheet::TargetCache::load)
    /// when a fetch failure has nothing to fall back to.
    #[error("No cached target list at {0}")]
    CacheMiss(PathBuf),

    /// I/O and serialization errors.
    ///
    /// Wraps cache read/write failures and report serialization failures.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for FollowbackError.
///
/// This is a convenience alias for `std::result::Result<T, FollowbackError>`.
pub type Result<T> = std::result::Result<T, FollowbackError>;
