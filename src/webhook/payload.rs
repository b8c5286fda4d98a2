//! Request body assembly.
//!
//! Bodies are built fresh for every call from the webhook's overrides and
//! the call's content, so a send never feeds back into webhook state.

use serde::Serialize;

use crate::embed::Embed;

use super::MultipartForm;

/// JSON body of a message post.
///
/// `username` and `avatar_url` are always present; an unset override is
/// sent as an empty string.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Payload<'a> {
    /// Plain message text
    pub content: &'a str,
    /// Embeds in display order
    pub embeds: &'a [Embed],
    /// Display name override
    pub username: &'a str,
    /// Avatar override
    pub avatar_url: &'a str,
}

impl Payload<'_> {
    /// Encodes the payload as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Builds the multipart body for a file upload.
///
/// Part order is `avatar_url`, `username`, then `file`.
pub(super) fn file_form(
    avatar_url: &str,
    username: &str,
    file_name: String,
    bytes: Vec<u8>,
) -> MultipartForm {
    MultipartForm::new()
        .text("avatar_url", avatar_url)
        .text("username", username)
        .file("file", file_name, bytes)
}
