//! Command-line interface definitions for zjj_feed.
//!
//! Source settings can be given as flags, environment variables, or a YAML
//! file passed with `--config`. Flags and environment variables win over the
//! file.

use crate::config::SourceConfig;
use clap::{Parser, ValueEnum};

/// Output document format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Rss,
}

/// Scrape a Shenzhen Housing and Construction Bureau listing into a feed.
///
/// # Examples
///
/// ```sh
/// # JSON to stdout
/// zjj_feed tzgg
///
/// # RSS to a file, dates interpreted at UTC+8
/// zjj_feed tzgg --format rss --utc-offset-minutes 480 -o ./feeds/tzgg.xml
///
/// # Show the supported categories
/// zjj_feed --list-categories
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing category key (see --list-categories)
    #[arg(required_unless_present = "list_categories")]
    pub category: Option<String>,

    /// Print the supported categories and exit
    #[arg(long)]
    pub list_categories: bool,

    /// Optional path to a YAML source configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL that category paths are joined onto
    #[arg(long, env = "ZJJ_BASE_URL")]
    pub base_url: Option<String>,

    /// Minutes east of UTC at which listing dates are interpreted
    #[arg(long, env = "ZJJ_UTC_OFFSET_MINUTES", allow_negative_numbers = true)]
    pub utc_offset_minutes: Option<i32>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "ZJJ_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with the request
    #[arg(long, env = "ZJJ_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Cli {
    /// Overlay the settings given on the command line onto `config`.
    pub fn apply_overrides(&self, mut config: SourceConfig) -> SourceConfig {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(offset) = self.utc_offset_minutes {
            config.utc_offset_minutes = offset;
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = Some(user_agent.clone());
        }
        config
    }
}
