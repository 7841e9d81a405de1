//! # zjj_feed
//!
//! Turns the listing pages of the Shenzhen Municipal Housing and Construction
//! Bureau (深圳市住房和建设局, `zjj.sz.gov.cn`) into typed feeds.
//!
//! ## Architecture
//!
//! 1. **Resolve**: map a category key to its page and label ([`category`])
//! 2. **Fetch**: GET the listing page ([`transport`])
//! 3. **Extract**: read each listing row ([`scrapers::listing`])
//! 4. **Normalize**: absolute links, UTC instants ([`date`])
//! 5. **Assemble**: a [`FeedResult`] in page order ([`pipeline`])
//!
//! Rendering to JSON or RSS lives in [`outputs`].
//!
//! ```ignore
//! let fetcher = HttpFetcher::from_config(&config)?;
//! let pipeline = ScrapePipeline::from_config(fetcher, &config)?;
//! let feed = pipeline.run("tzgg").await?;
//! ```

pub mod category;
pub mod cli;
pub mod config;
pub mod date;
pub mod error;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod scrapers;
pub mod transport;
pub mod utils;

pub use category::{Category, CategoryConfig};
pub use config::SourceConfig;
pub use error::{ConfigError, EntryError, FeedError, TransportError};
pub use models::{FeedItem, FeedResult};
pub use pipeline::ScrapePipeline;
pub use transport::{Fetch, HttpFetcher};
