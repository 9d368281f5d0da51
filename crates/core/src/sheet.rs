//! Target-list fetching from a published spreadsheet.
//!
//! The curated target list lives in a shared Google Sheet. This module
//! rewrites the share URL to the CSV export endpoint, fetches it with a
//! cache-busting parameter so a fresh edit is observed, flattens the rows
//! into cells, and keeps only cells shaped like handles. A small on-disk
//! cache holds the last successfully fetched list so a caller can fall back
//! to stale data when the network is unavailable.

use std::fs;
use std::path::PathBuf;

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::handle::is_valid_handle;
use crate::{FollowbackError, Result};

#[cfg(feature = "fetch")]
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[cfg(feature = "fetch")]
use reqwest::Client;

static SHEET_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"spreadsheets/d/([a-zA-Z0-9-_]+)").unwrap());

/// HTTP client configuration for fetching the published sheet.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Followback/1.0; +https://github.com/stormlightlabs/followback)"
                .to_string(),
        }
    }
}

/// Rewrites a sheet share URL to its CSV export endpoint.
///
/// A standard share link (`…/spreadsheets/d/<id>/edit?usp=sharing`) becomes
/// `…/spreadsheets/d/<id>/export?format=csv`. A URL already pointing at a
/// CSV export, or any other well-formed URL, passes through unchanged; the
/// fetch will surface whatever the host returns for it.
///
/// # Errors
///
/// Returns [`FollowbackError::InvalidUrl`] when the input is not a
/// well-formed absolute URL.
pub fn sheet_csv_url(url: &str) -> Result<String> {
    Url::parse(url).map_err(|e| FollowbackError::InvalidUrl(e.to_string()))?;

    if let Some(caps) = SHEET_ID_RE.captures(url) {
        let sheet_id = &caps[1];
        return Ok(format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
            sheet_id
        ));
    }

    Ok(url.to_string())
}

/// Flattens CSV text into an ordered, deduplicated target list.
///
/// Every cell of every row is a candidate; cells are trimmed and admitted
/// only when they match the handle pattern (3–30 characters of
/// `[A-Za-z0-9._]`), which drops headers, notes, and blanks. Duplicates
/// collapse keeping the first occurrence, so the sheet's top-to-bottom,
/// left-to-right order determines result order.
pub fn parse_target_csv(text: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut seen = std::collections::HashSet::new();
    let mut targets = Vec::new();

    for record in reader.records() {
        let record = record?;
        for cell in record.iter() {
            let cell = cell.trim();
            if is_valid_handle(cell) && seen.insert(cell.to_string()) {
                targets.push(cell.to_string());
            }
        }
    }

    Ok(targets)
}

/// Fetches and parses the target list from a sheet URL.
///
/// The share URL is rewritten to the CSV export endpoint and fetched with a
/// timestamp query parameter appended, defeating intermediary caches so the
/// latest published edit is returned.
///
/// # Errors
///
/// Returns [`FollowbackError::InvalidUrl`] for an unusable URL,
/// [`FollowbackError::Timeout`] when the request exceeds the configured
/// timeout, [`FollowbackError::HttpStatus`] for a non-success response, and
/// [`FollowbackError::HttpError`] for transport failures.
#[cfg(feature = "fetch")]
pub async fn fetch_target_list(url: &str, config: &FetchConfig) -> Result<Vec<String>> {
    let csv_url = sheet_csv_url(url)?;

    let mut fetch_url = Url::parse(&csv_url).map_err(|e| FollowbackError::InvalidUrl(e.to_string()))?;
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    fetch_url.query_pairs_mut().append_pair("t", &millis.to_string());

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(FollowbackError::HttpError)?;

    let response = client
        .get(fetch_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/csv,text/plain;q=0.9,*/*;q=0.8")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                FollowbackError::Timeout { timeout: config.timeout }
            } else {
                FollowbackError::HttpError(e)
            }
        })?;

    if !response.status().is_success() {
        return Err(FollowbackError::HttpStatus { status: response.status().as_u16() });
    }

    let body = response.text().await?;

    parse_target_csv(&body)
}

/// On-disk cache for the last successfully fetched target list.
///
/// Stored as newline-separated handles under the user cache directory.
/// The cache is a fallback collaborator, not part of the reconciliation
/// engine; callers decide whether stale data is acceptable.
#[derive(Debug, Clone)]
pub struct TargetCache {
    path: PathBuf,
}

impl TargetCache {
    /// Creates a cache at the standard user cache location.
    ///
    /// Returns `None` when the platform exposes no cache directory.
    pub fn new() -> Option<Self> {
        dirs::cache_dir().map(|dir| Self { path: dir.join("followback").join("targets.txt") })
    }

    /// Creates a cache backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this cache reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persists a fetched target list, replacing any previous contents.
    pub fn store(&self, targets: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut body = targets.join("\n");
        body.push('\n');
        fs::write(&self.path, body)?;

        Ok(())
    }

    /// Loads the previously stored target list.
    ///
    /// # Errors
    ///
    /// Returns [`FollowbackError::CacheMiss`] when nothing has been stored
    /// yet, and [`FollowbackError::Io`] when the file exists but cannot be
    /// read.
    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Err(FollowbackError::CacheMiss(self.path.clone()));
        }

        let body = fs::read_to_string(&self.path)?;
        Ok(body.lines().filter(|line| !line.is_empty()).map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_share_url_rewritten_to_csv_export() {
        let url = "https://docs.google.com/spreadsheets/d/1iTARyru1Jaek/edit?usp=sharing";
        let csv_url = sheet_csv_url(url).unwrap();
        assert_eq!(
            csv_url,
            "https://docs.google.com/spreadsheets/d/1iTARyru1Jaek/export?format=csv"
        );
    }

    #[test]
    fn test_csv_export_url_passes_through() {
        let url = "https://example.com/data/export?format=csv";
        assert_eq!(sheet_csv_url(url).unwrap(), url);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = sheet_csv_url("not a url");
        assert!(matches!(result, Err(FollowbackError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_csv_filters_and_flattens() {
        let csv = "handle list,note\njane_doe,added last week\nbob.smith_99,\nno spaces here!,x\n";
        let targets = parse_target_csv(csv).unwrap();

        // "handle list" and "added last week" carry spaces, "x" is too
        // short; "note" is shaped like a handle and is deliberately kept.
        assert_eq!(targets, vec!["note", "jane_doe", "bob.smith_99"]);
    }

    #[test]
    fn test_parse_csv_dedupes_keeping_first_order() {
        let csv = "zeta\nalpha\nzeta\nmike\nalpha\n";
        let targets = parse_target_csv(csv).unwrap();

        assert_eq!(targets, vec!["zeta", "alpha", "mike"]);
    }

    #[test]
    fn test_parse_csv_trims_and_unquotes_cells() {
        let csv = "\"jane_doe\", bob_smith \n";
        let targets = parse_target_csv(csv).unwrap();

        assert_eq!(targets, vec!["jane_doe", "bob_smith"]);
    }

    #[test]
    fn test_parse_csv_rejects_out_of_range_lengths() {
        let long = "a".repeat(31);
        let csv = format!("ab\n{}\nabc\n", long);
        let targets = parse_target_csv(&csv).unwrap();

        assert_eq!(targets, vec!["abc"]);
    }

    #[test]
    fn test_parse_csv_empty_input() {
        let targets = parse_target_csv("").unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Followback"));
    }

    #[test]
    fn test_cache_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let cache = TargetCache::at(tmp.path().join("targets.txt"));

        let targets = vec!["jane_doe".to_string(), "bob_smith".to_string()];
        cache.store(&targets).unwrap();

        assert_eq!(cache.load().unwrap(), targets);
    }

    #[test]
    fn test_cache_store_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let cache = TargetCache::at(tmp.path().join("nested").join("dir").join("targets.txt"));

        cache.store(&["jane_doe".to_string()]).unwrap();
        assert!(cache.path().exists());
    }

    #[test]
    fn test_cache_miss() {
        let tmp = TempDir::new().unwrap();
        let cache = TargetCache::at(tmp.path().join("absent.txt"));

        let result = cache.load();
        assert!(matches!(result, Err(FollowbackError::CacheMiss(_))));
    }

    #[test]
    fn test_cache_store_overwrites() {
        let tmp = TempDir::new().unwrap();
        let cache = TargetCache::at(tmp.path().join("targets.txt"));

        cache.store(&["old_entry".to_string()]).unwrap();
        cache.store(&["new_entry".to_string()]).unwrap();

        assert_eq!(cache.load().unwrap(), vec!["new_entry"]);
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_invalid_url() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_target_list("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(FollowbackError::InvalidUrl(_))));
    }
}
