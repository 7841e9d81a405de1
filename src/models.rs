//! Feed data models.
//!
//! - [`FeedItem`]: one normalized listing entry
//! - [`FeedResult`]: the feed for one category, handed to the output layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single normalized listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedItem {
    /// The entry title as shown on the listing page.
    pub title: String,
    /// Absolute URL of the entry's detail page.
    pub link: String,
    /// Publication instant, normalized to UTC.
    pub published_at: DateTime<Utc>,
}

/// The feed produced for one category.
///
/// `items` keeps the order in which entries appear on the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedResult {
    /// Source identity followed by the category label.
    pub title: String,
    /// Absolute URL of the listing page that was fetched.
    pub link: String,
    pub items: Vec<FeedItem>,
}
