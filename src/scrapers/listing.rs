//! Per-entry extraction for the bureau's listing pages.
//!
//! A listing row looks like:
//!
//! ```html
//! <li>
//!   <a href="content/post_11181232.html" target="_blank">关于……的通知</a>
//!   <span>24-03-15</span>
//! </li>
//! ```
//!
//! Extraction only sees rows through [`ListingNode`], a narrow view that can
//! find the first descendant matching a selector, read its text, and read an
//! attribute. `scraper::ElementRef` implements it for real pages; tests use
//! hand-built trees.

use crate::date::{parse_date, LISTING_DATE_FORMAT};
use crate::error::EntryError;
use crate::models::FeedItem;
use crate::utils::collapse_whitespace;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use url::Url;

/// Selector for the element carrying a row's title and link.
pub const ANCHOR_SELECTOR: &str = "a";
/// Selector for the element carrying a row's display date.
pub const DATE_SELECTOR: &str = "span";

/// A CSS query, kept both as text and as a selector parsed on first use.
pub struct NodeQuery {
    css: &'static str,
    selector: Lazy<Selector>,
}

impl NodeQuery {
    /// The CSS text of the query.
    pub fn css(&self) -> &'static str {
        self.css
    }

    /// The parsed selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// First anchor of a row: title text and `href`.
pub static ANCHOR: NodeQuery = NodeQuery {
    css: ANCHOR_SELECTOR,
    selector: Lazy::new(|| {
        Selector::parse(ANCHOR_SELECTOR).expect("anchor selector is valid CSS")
    }),
};

/// First span of a row: display date.
pub static DATE: NodeQuery = NodeQuery {
    css: DATE_SELECTOR,
    selector: Lazy::new(|| {
        Selector::parse(DATE_SELECTOR).expect("date selector is valid CSS")
    }),
};

/// Read-only traversal over one listing row.
pub trait ListingNode: Sized {
    /// First descendant matching `query`, in document order.
    fn find_first(&self, query: &NodeQuery) -> Option<Self>;
    /// Concatenated text of this node and its descendants.
    fn inner_text(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<'a> ListingNode for ElementRef<'a> {
    fn find_first(&self, query: &NodeQuery) -> Option<Self> {
        self.select(query.selector()).next()
    }

    fn inner_text(&self) -> String {
        self.text().collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}

/// One listing row as found on the page, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListEntry {
    pub title: String,
    pub href: String,
    pub raw_date: String,
}

/// Pull the title, href and display date out of a row.
///
/// The first anchor supplies title and href; the first span supplies the
/// date. A row missing either is rejected.
///
/// # Arguments
///
/// * `node` - One listing row
///
/// # Returns
///
/// The raw title, href and date text, or the [`EntryError`] describing which
/// part is missing.
pub fn extract_entry<N: ListingNode>(node: &N) -> Result<RawListEntry, EntryError> {
    let anchor = node
        .find_first(&ANCHOR)
        .ok_or(EntryError::MissingAnchor)?;
    let href = anchor
        .attribute("href")
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
        .ok_or(EntryError::MissingHref)?;
    let date = node
        .find_first(&DATE)
        .ok_or(EntryError::MissingDate)?;

    Ok(RawListEntry {
        title: collapse_whitespace(&anchor.inner_text()),
        href,
        raw_date: date.inner_text().trim().to_string(),
    })
}

/// Resolve the href against `source_url` and parse the date at
/// `utc_offset_minutes`.
pub fn normalize_entry(
    raw: RawListEntry,
    source_url: &Url,
    utc_offset_minutes: i32,
) -> Result<FeedItem, EntryError> {
    let link = source_url
        .join(&raw.href)
        .map_err(|source| EntryError::InvalidLink {
            href: raw.href.clone(),
            source,
        })?;
    let published_at = parse_date(&raw.raw_date, LISTING_DATE_FORMAT, utc_offset_minutes)
        .map_err(|source| EntryError::InvalidDate {
            raw: raw.raw_date.clone(),
            source,
        })?;

    Ok(FeedItem {
        title: raw.title,
        link: link.to_string(),
        published_at,
    })
}
