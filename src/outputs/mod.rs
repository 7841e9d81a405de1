//! Rendering a [`FeedResult`](crate::models::FeedResult) for consumers.
//!
//! # Submodules
//!
//! - [`json`]: pretty-printed JSON of the feed structure
//! - [`rss`]: RSS 2.0 document
//!
//! [`write_output`] sends the rendered document to a file or stdout.

pub mod json;
pub mod rss;

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

/// Failure to render or write a feed.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rendered feed is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write `document` to `path`, or to stdout when `path` is `None`.
///
/// Parent directories of `path` are created as needed.
#[instrument(level = "info", skip_all, fields(path = path.unwrap_or("-")))]
pub async fn write_output(document: &str, path: Option<&str>) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await?;
                }
            }
            fs::write(path, document).await?;
            info!(bytes = document.len(), "Wrote feed");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(document.as_bytes()).await?;
            if !document.ends_with('\n') {
                stdout.write_all(b"\n").await?;
            }
            stdout.flush().await?;
        }
    }
    Ok(())
}
