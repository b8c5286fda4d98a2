//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};

use crate::embed::EmbedBuilder;

use super::defaults;

/// chathook: post messages, embeds and files to a chat webhook
#[derive(Debug, Parser)]
#[command(name = "chathook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Webhook URL, token included
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Display name override (shorter than 80 bytes)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Avatar image URL override
    #[arg(long = "avatar-url", global = true)]
    pub avatar_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for chathook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Actions that talk to the webhook
    #[command(flatten)]
    Webhook(WebhookCommand),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Subcommands that send one request to the webhook.
#[derive(Debug, Subcommand)]
pub enum WebhookCommand {
    /// Post a plain text message
    Send {
        /// Message text
        content: String,
    },

    /// Post a single rich embed
    Embed(EmbedArgs),

    /// Upload a file
    File {
        /// Path to the file, relative to the working directory
        path: PathBuf,
    },

    /// Delete the webhook
    Delete,
}

/// Options describing one embed.
#[derive(Debug, Default, Clone, Args)]
pub struct EmbedArgs {
    /// Embed title
    #[arg(long)]
    pub title: Option<String>,

    /// Embed body text
    #[arg(long)]
    pub description: Option<String>,

    /// URL the title links to
    #[arg(long = "embed-url")]
    pub url: Option<String>,

    /// Side-bar color: `#RRGGBB`, `0xRRGGBB` or a decimal number
    #[arg(long, value_parser = parse_color)]
    pub color: Option<u32>,

    /// Author name
    #[arg(long = "author-name")]
    pub author_name: Option<String>,

    /// Author link
    #[arg(long = "author-url")]
    pub author_url: Option<String>,

    /// Author icon URL
    #[arg(long = "author-icon")]
    pub author_icon: Option<String>,

    /// Footer text
    #[arg(long = "footer-text")]
    pub footer_text: Option<String>,

    /// Footer icon URL
    #[arg(long = "footer-icon")]
    pub footer_icon: Option<String>,

    /// Main image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Thumbnail image URL
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Field in 'NAME=VALUE' format (can be specified multiple times, order is kept)
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Render all fields inline
    #[arg(long)]
    pub inline: bool,

    /// Timestamp: 'now' or an RFC 3339 date-time
    #[arg(long, value_parser = parse_timestamp)]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl From<&EmbedArgs> for EmbedBuilder {
    fn from(args: &EmbedArgs) -> Self {
        let mut builder = Self::new();

        if let Some(title) = &args.title {
            builder = builder.title(title.clone());
        }
        if let Some(description) = &args.description {
            builder = builder.description(description.clone());
        }
        if let Some(url) = &args.url {
            builder = builder.url(url.clone());
        }
        if let Some(color) = args.color {
            builder = builder.color(color);
        }
        if args.author_name.is_some() || args.author_url.is_some() || args.author_icon.is_some() {
            builder = builder.author(
                args.author_name.clone().unwrap_or_default(),
                args.author_url.clone().unwrap_or_default(),
                args.author_icon.clone().unwrap_or_default(),
            );
        }
        if args.footer_text.is_some() || args.footer_icon.is_some() {
            builder = builder.footer(
                args.footer_text.clone().unwrap_or_default(),
                args.footer_icon.clone().unwrap_or_default(),
            );
        }
        if let Some(image) = &args.image {
            builder = builder.image(image.clone());
        }
        if let Some(thumbnail) = &args.thumbnail {
            builder = builder.thumbnail(thumbnail.clone());
        }
        for (name, value) in &args.fields {
            builder = builder.add_field(name.clone(), value.clone(), args.inline);
        }
        if let Some(timestamp) = &args.timestamp {
            builder = builder.timestamp(timestamp);
        }

        builder
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}

/// Parses `#RRGGBB`, `0xRRGGBB` or a decimal color.
fn parse_color(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let hex = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"));

    match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => s.parse::<u32>(),
    }
    .map_err(|e| format!("invalid color '{s}': {e}"))
}

/// Splits `NAME=VALUE` at the first `=`.
fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| format!("invalid field '{s}': expected 'NAME=VALUE'"))
}

/// Accepts `now` or an RFC 3339 date-time, keeping its offset.
fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, String> {
    if s.eq_ignore_ascii_case("now") {
        return Ok(Utc::now().fixed_offset());
    }
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("invalid timestamp '{s}': {e}"))
}
