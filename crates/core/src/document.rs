//! HTML snapshot parsing and link scanning.
//!
//! This module provides the [`Document`] and [`Link`] types for parsing an
//! exported follower page and walking its hyperlinks in document order.
//!
//! Parsing is best-effort with browser-grade leniency: truncated, unclosed,
//! or otherwise malformed markup still yields a tree, matching what the
//! platform's own export viewer would do with the file.
//!
//! # Example
//!
//! ```rust
//! use followback_core::document::Document;
//!
//! let html = r#"<html><body><a href="/u/jane_doe">jane_doe</a></body></html>"#;
//! let doc = Document::parse(html);
//! let texts: Vec<String> = doc.links().iter().map(|l| l.text()).collect();
//! assert_eq!(texts, vec!["jane_doe"]);
//! ```

use scraper::{Html, Selector};

/// A parsed follower snapshot.
///
/// Wraps an HTML page and exposes the hyperlink-scanning surface the
/// extractor needs. The underlying parser recovers from malformed markup
/// rather than failing, so construction is infallible; an unusable input
/// simply produces a tree with no qualifying links.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Never fails: html5ever repairs what it can and drops what it cannot,
    /// the same leniency a browser `DOMParser` applies to the export file.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Collects all `<a>` elements in document order.
    pub fn links(&self) -> Vec<Link<'_>> {
        // The selector literal is known good, so the parse cannot fail.
        let anchor = Selector::parse("a").unwrap();
        self.html.select(&anchor).map(|element| Link { element }).collect()
    }
}

/// A single hyperlink element within a [`Document`].
#[derive(Clone, Debug)]
pub struct Link<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Link<'a> {
    /// Gets the visible text content of this link.
    ///
    /// Returns the concatenation of all text nodes within the element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of the `href` attribute, if present.
    pub fn href(&self) -> Option<&'a str> {
        self.element.value().attr("href")
    }
}
