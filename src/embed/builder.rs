//! Fluent embed builder.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone};

use super::{Embed, EmbedField};

/// Chainable builder for an [`Embed`].
///
/// Each setter replaces exactly one field (or one nested object) and hands
/// the builder back. Inputs are stored as given: colors, URLs and lengths
/// are not checked. [`add_field`](Self::add_field) always appends, so the
/// rendered field order is the call order.
///
/// # Example
///
/// ```
/// use chathook::embed::EmbedBuilder;
///
/// let embed = EmbedBuilder::new()
///     .title("Deploy finished")
///     .color(0x2E_CC_71)
///     .add_field("Service", "api", true)
///     .add_field("Version", "1.4.2", true)
///     .build();
///
/// assert_eq!(embed.fields[0].name, "Service");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedBuilder {
    embed: Embed,
}

impl EmbedBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.embed.title = title.into();
        self
    }

    /// Sets the author line.
    #[must_use]
    pub fn author(
        mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        self.embed.author.name = name.into();
        self.embed.author.url = url.into();
        self.embed.author.icon_url = icon_url.into();
        self
    }

    /// Sets the URL the title links to.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.embed.url = url.into();
        self
    }

    /// Appends a field after any existing ones.
    #[must_use]
    pub fn add_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.embed.fields.push(EmbedField::new(name, value, inline));
        self
    }

    /// Sets the side-bar color as packed `0xRRGGBB`.
    #[must_use]
    pub const fn color(mut self, color: u32) -> Self {
        self.embed.color = color;
        self
    }

    /// Sets the thumbnail image URL.
    #[must_use]
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.embed.thumbnail.url = url.into();
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.embed.description = description.into();
        self
    }

    /// Sets the main image URL.
    #[must_use]
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.embed.image.url = url.into();
        self
    }

    /// Sets the footer line.
    #[must_use]
    pub fn footer(mut self, text: impl Into<String>, icon_url: impl Into<String>) -> Self {
        self.embed.footer.text = text.into();
        self.embed.footer.icon_url = icon_url.into();
        self
    }

    /// Sets the timestamp shown in the footer.
    ///
    /// The instant is rendered immediately as RFC 3339 with whole seconds,
    /// using `Z` for a zero offset (e.g. `2024-05-01T12:30:00Z` or
    /// `2024-05-01T14:30:00+02:00`). Only the rendered string is kept.
    #[must_use]
    pub fn timestamp<Tz>(mut self, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.embed.timestamp = at.to_rfc3339_opts(SecondsFormat::Secs, true);
        self
    }

    /// Returns the embed assembled so far.
    #[must_use]
    pub const fn as_embed(&self) -> &Embed {
        &self.embed
    }

    /// Consumes the builder and returns the assembled embed.
    #[must_use]
    pub fn build(self) -> Embed {
        self.embed
    }
}

impl From<Embed> for EmbedBuilder {
    fn from(embed: Embed) -> Self {
        Self { embed }
    }
}
