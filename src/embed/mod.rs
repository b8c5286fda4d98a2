//! Rich embed records and the fluent builder that assembles them.
//!
//! This module provides:
//! - The serializable embed record ([`Embed`]) and its nested parts
//! - A chainable builder ([`EmbedBuilder`]) used by
//!   [`Webhook::send_embed`](crate::webhook::Webhook::send_embed)

mod builder;
mod types;


pub use builder::EmbedBuilder;
pub use types::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail};
