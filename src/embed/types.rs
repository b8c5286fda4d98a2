//! Wire shape of an embed.

use serde::{Deserialize, Serialize};

/// A single rich embed as sent to the webhook endpoint.
///
/// Every field is always serialized. Unset strings render as `""`, an unset
/// color as `0`, and nested objects are always present, so the JSON shape
/// does not depend on which setters were called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Packed `0xRRGGBB` value.
    pub color: u32,
    pub author: EmbedAuthor,
    pub footer: EmbedFooter,
    /// RFC 3339 date-time, rendered when the timestamp was set.
    pub timestamp: String,
    pub image: EmbedImage,
    pub thumbnail: EmbedThumbnail,
    /// Fields in insertion order.
    pub fields: Vec<EmbedField>,
}

/// Embed author line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

/// Embed footer line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

/// Large image shown below the embed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    pub url: String,
}

/// Small image shown beside the embed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

/// A name/value pair rendered inside the embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}
