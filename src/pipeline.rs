//! The scrape pipeline: category key in, [`FeedResult`] out.
//!
//! 1. Resolve the key in the [category registry](crate::category). Unknown
//!    keys fail here, before any network I/O.
//! 2. Join the category path onto the base URL. That URL is both what gets
//!    fetched and the feed's `link`.
//! 3. Fetch the page through a [`Fetch`] implementation.
//! 4. Select the listing rows with [`LISTING_ENTRY_SELECTOR`].
//! 5. Extract and normalize each row. Rows that fail are logged and skipped.
//! 6. Assemble the feed, keeping page order.
//!
//! # Page structure
//!
//! [`LISTING_ENTRY_SELECTOR`] encodes what the bureau's page looks like today.
//! If the site is redesigned and the container disappears, the pipeline
//! returns an empty feed and logs a `warn` with a preview of the body; it
//! does not fail the invocation.

use crate::category::{self, CategoryConfig};
use crate::config::SourceConfig;
use crate::error::{ConfigError, FeedError};
use crate::models::{FeedItem, FeedResult};
use crate::scrapers::listing::{extract_entry, normalize_entry};
use crate::transport::Fetch;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Source identity used as the feed title prefix.
pub const SOURCE_NAME: &str = "深圳市住房和建设局";

/// Container holding the listing on the bureau's pages.
pub const LISTING_CONTAINER_SELECTOR: &str = "div.listcontent_right";

/// One element per listing row.
pub const LISTING_ENTRY_SELECTOR: &str = "div.listcontent_right ul li";

static CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(LISTING_CONTAINER_SELECTOR).expect("container selector is valid CSS")
});

static ENTRY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(LISTING_ENTRY_SELECTOR).expect("entry selector is valid CSS"));

/// Turns category keys into feeds. Holds no per-invocation state, so one value
/// can serve any number of calls.
#[derive(Debug, Clone)]
pub struct ScrapePipeline<F> {
    fetcher: F,
    base_url: Url,
    utc_offset_minutes: i32,
}

impl<F: Fetch> ScrapePipeline<F> {
    /// Create a pipeline from already-validated parts.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Transport used for the single GET per run
    /// * `base_url` - Listing base URL; category paths are joined onto it
    /// * `utc_offset_minutes` - Offset at which listing dates are interpreted
    pub fn new(fetcher: F, base_url: Url, utc_offset_minutes: i32) -> Self {
        Self {
            fetcher,
            base_url,
            utc_offset_minutes,
        }
    }

    /// Create a pipeline from a [`SourceConfig`], validating it first.
    ///
    /// # Returns
    ///
    /// The pipeline, or the first [`ConfigError`] found in `config` (bad base
    /// URL, out-of-range offset, zero timeout).
    pub fn from_config(fetcher: F, config: &SourceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            fetcher,
            config.base_url()?,
            config.utc_offset_minutes,
        ))
    }

    /// Absolute URL of a category's listing page.
    pub fn source_url(&self, config: &CategoryConfig) -> Result<Url, FeedError> {
        self.base_url
            .join(config.relative_path)
            .map_err(|source| FeedError::InvalidSourceUrl {
                base: self.base_url.to_string(),
                path: config.relative_path.to_string(),
                source,
            })
    }

    /// Build the feed for `key`.
    ///
    /// # Errors
    ///
    /// - [`FeedError::InvalidCategory`] if `key` is not registered; nothing is
    ///   fetched in that case.
    /// - [`FeedError::Transport`] if the page could not be fetched.
    ///
    /// Malformed rows and a missing listing container are not errors.
    #[instrument(level = "info", skip(self), fields(category = %key))]
    pub async fn run(&self, key: &str) -> Result<FeedResult, FeedError> {
        let (category, config) = category::resolve(key)?;
        let source_url = self.source_url(config)?;
        debug!(%category, url = %source_url, "Resolved category");

        let body = self.fetcher.fetch(&source_url).await?;
        let items = extract_items(&body, &source_url, self.utc_offset_minutes);

        Ok(FeedResult {
            title: feed_title(config),
            link: source_url.to_string(),
            items,
        })
    }
}

/// `"<source> - <label>"`.
pub fn feed_title(config: &CategoryConfig) -> String {
    format!("{} - {}", SOURCE_NAME, config.label)
}

/// Parse `body` and turn every well-formed listing row into a [`FeedItem`],
/// in page order.
#[instrument(level = "info", skip_all, fields(url = %source_url))]
pub fn extract_items(body: &str, source_url: &Url, utc_offset_minutes: i32) -> Vec<FeedItem> {
    let document = Html::parse_document(body);

    let mut items = Vec::new();
    let mut skipped = 0usize;
    for (index, node) in document.select(&ENTRY).enumerate() {
        let entry = extract_entry(&node)
            .and_then(|raw| normalize_entry(raw, source_url, utc_offset_minutes));
        match entry {
            Ok(item) => items.push(item),
            Err(e) => {
                skipped += 1;
                warn!(
                    index,
                    error = %e,
                    row = %truncate_for_log(node.html().trim(), 200),
                    "Skipping malformed listing entry"
                );
            }
        }
    }

    if items.is_empty() && skipped == 0 {
        if document.select(&CONTAINER).next().is_none() {
            warn!(
                selector = LISTING_CONTAINER_SELECTOR,
                preview = %truncate_for_log(body, 300),
                "Listing container not found; page structure may have changed"
            );
        } else {
            info!("Listing container has no entries");
        }
    }

    info!(count = items.len(), skipped, "Extracted listing entries");
    items
}
