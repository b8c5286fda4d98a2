//! chathook: a small webhook client for chat platforms.
//!
//! A library for posting plain messages, rich embeds and file attachments
//! to a webhook endpoint, plus the configuration layer of the `chathook`
//! command-line tool.

pub mod config;
pub mod embed;
pub mod webhook;
