//! Result report formatting.
//!
//! Presentation-side serialization of a reconciliation result: the
//! newline-joined "copy as text" form with its fixed header and footer
//! banner, the human-readable listing with per-entry profile links, and a
//! JSON payload for scripting. None of this is part of the engine contract;
//! the engine hands back plain identifiers and this module dresses them up.

use serde::Serialize;

use crate::Result;

const HEADER: &str = "Accounts not following back:";
const FOOTER: &str = "Checked with followback";
const PROFILE_BASE: &str = "https://www.instagram.com/";

/// Configuration for plain text report output.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Wrap the list in the fixed header/footer banner.
    pub include_banner: bool,

    /// Append each entry's profile URL.
    pub include_profile_urls: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { include_banner: true, include_profile_urls: false }
    }
}

/// A reconciliation result ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Targets not found in the follower set, in target-list order.
    pub non_mutual: Vec<String>,

    /// Number of entries in the target list that was checked.
    pub target_count: usize,

    /// Number of distinct handles extracted from the snapshot.
    pub follower_count: usize,
}

impl Report {
    pub fn new(non_mutual: Vec<String>, target_count: usize, follower_count: usize) -> Self {
        Self { non_mutual, target_count, follower_count }
    }

    /// Whether every target follows back.
    pub fn all_mutual(&self) -> bool {
        self.non_mutual.is_empty()
    }

    /// Serializes the report as copy-ready plain text.
    ///
    /// Identifiers are newline-joined; with the banner enabled the list is
    /// wrapped in the fixed header line and footer, matching the clipboard
    /// affordance of the result view.
    pub fn to_text(&self, config: &ReportConfig) -> String {
        let mut lines = Vec::new();

        if config.include_banner {
            lines.push(HEADER.to_string());
        }

        for id in &self.non_mutual {
            if config.include_profile_urls {
                lines.push(format!("{}\t{}{}", id, PROFILE_BASE, id));
            } else {
                lines.push(id.clone());
            }
        }

        if config.include_banner {
            lines.push(String::new());
            lines.push(FOOTER.to_string());
        }

        lines.join("\n")
    }

    /// Serializes the report as structured JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(std::io::Error::other)?)
    }
}

/// The profile URL for a handle.
pub fn profile_url(id: &str) -> String {
    format!("{}{}", PROFILE_BASE, id)
}
