//! Configuration layer for the `chathook` command-line tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`WebhookCommand`], [`EmbedArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URL has no default and must come from one of the first two.
//!
//! # Validation
//!
//! The URL is checked here, once, so the webhook layer can treat it as an
//! opaque string. Username and avatar overrides go through the same checks
//! as [`Webhook::set_username`](crate::webhook::Webhook::set_username) and
//! [`Webhook::set_avatar`](crate::webhook::Webhook::set_avatar).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, EmbedArgs, WebhookCommand};
pub use error::{ConfigError, field};
pub use self::toml::{HttpSection, TomlConfig, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
