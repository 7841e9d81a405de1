//! JSON output.
//!
//! Serializes the feed as-is; `published_at` is emitted as RFC 3339 in UTC.

use super::OutputError;
use crate::models::FeedResult;

/// Render `feed` as pretty-printed JSON.
pub fn render_feed(feed: &FeedResult) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(feed)?)
}
