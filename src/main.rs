//! Command-line entry point: scrape one category and print or save the feed.
//!
//! ```sh
//! RUST_LOG=debug zjj_feed tzgg --format rss -o ./feeds/tzgg.xml
//! ```

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use zjj_feed::category::Category;
use zjj_feed::cli::{Cli, OutputFormat};
use zjj_feed::outputs::{json, rss, write_output};
use zjj_feed::{FeedError, HttpFetcher, ScrapePipeline, SourceConfig};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so stdout stays clean for the feed document.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    if args.list_categories {
        for category in Category::ALL {
            println!("{}\t{}", category.key(), category.config().label);
        }
        return Ok(());
    }

    // ---- Configuration ----
    let file_config = match &args.config {
        Some(path) => SourceConfig::from_yaml_file(path).await?,
        None => SourceConfig::default(),
    };
    let config = args.apply_overrides(file_config);
    let fetcher = HttpFetcher::from_config(&config)?;
    let pipeline = match ScrapePipeline::from_config(fetcher, &config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!(error = %e, "Invalid source configuration");
            return Err(e.into());
        }
    };
    info!(
        base_url = %config.base_url,
        utc_offset_minutes = config.utc_offset_minutes,
        timeout_secs = config.timeout_secs,
        "Source configuration ready"
    );

    // ---- Scrape ----
    let key = args.category.as_deref().unwrap_or_default();
    let feed = match pipeline.run(key).await {
        Ok(feed) => feed,
        Err(e) => {
            error!(category = %key, error = %e, retryable = e.is_retryable(), "Feed build failed");
            if matches!(e, FeedError::InvalidCategory { .. }) {
                eprintln!("Run with --list-categories to see the supported categories.");
            }
            return Err(e.into());
        }
    };

    // ---- Output ----
    let document = match args.format {
        OutputFormat::Json => json::render_feed(&feed)?,
        OutputFormat::Rss => rss::render_feed(&feed)?,
    };
    write_output(&document, args.output.as_deref()).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        items = feed.items.len(),
        format = ?args.format,
        "Execution complete"
    );
    Ok(())
}
