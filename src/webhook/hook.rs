//! The webhook handle and its send/delete operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use http::HeaderValue;
use tracing::debug;

use crate::embed::EmbedBuilder;

use super::payload::{self, Payload};
use super::{HttpClient, HttpRequest, HttpResponse, ReqwestClient, ValidationError, WebhookError};

/// `user-agent` sent with every message post.
pub const USER_AGENT: &str = concat!("chathook/", env!("CARGO_PKG_VERSION"));

/// Usernames must have fewer bytes than this.
pub const USERNAME_LIMIT: usize = 80;

/// A handle to one webhook endpoint.
///
/// The endpoint string is the full POST/DELETE target, token included,
/// and is never parsed or checked here. Username and avatar overrides are
/// validated when set and copied into every request body.
///
/// Each operation issues exactly one request. Statuses in `400..=599` become
/// [`WebhookError::Remote`]; nothing is retried.
///
/// The executor is held behind an [`Arc`] so several webhooks can share one
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use chathook::embed::EmbedBuilder;
/// use chathook::webhook::Webhook;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut hook = Webhook::new("https://chat.example.com/api/webhooks/123/secret");
/// hook.set_username("build-bot")?;
///
/// hook.send("Build started").await?;
/// hook.send_embed(&EmbedBuilder::new().title("Build passed").color(0x2E_CC_71))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Webhook<H = ReqwestClient> {
    endpoint: String,
    username: Option<String>,
    avatar_url: Option<String>,
    client: Arc<H>,
}

impl Webhook<ReqwestClient> {
    /// Creates a webhook backed by a fresh [`ReqwestClient`].
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Arc::new(ReqwestClient::new()))
    }
}

impl<H> Webhook<H> {
    /// Creates a webhook that sends through a shared executor.
    #[must_use]
    pub fn with_client(endpoint: impl Into<String>, client: Arc<H>) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: None,
            avatar_url: None,
            client,
        }
    }

    /// Sets the display name override.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UsernameTooLong`] if `username` has
    /// [`USERNAME_LIMIT`] or more bytes. The previous value is kept.
    pub fn set_username(&mut self, username: impl Into<String>) -> Result<(), ValidationError> {
        let username = username.into();
        validate_username(&username)?;
        self.username = Some(username);
        Ok(())
    }

    /// Sets the avatar override.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAvatarUrl`] unless `avatar_url` is an
    /// absolute URL with a scheme and a host. The previous value is kept.
    pub fn set_avatar(&mut self, avatar_url: impl Into<String>) -> Result<(), ValidationError> {
        let avatar_url = avatar_url.into();
        validate_avatar_url(&avatar_url)?;
        self.avatar_url = Some(avatar_url);
        Ok(())
    }

    /// Returns the endpoint string.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the display name override, if set.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the avatar override, if set.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the shared executor.
    #[must_use]
    pub const fn client(&self) -> &Arc<H> {
        &self.client
    }

    fn payload<'a>(&'a self, content: &'a str, embeds: &'a [crate::embed::Embed]) -> Payload<'a> {
        Payload {
            content,
            embeds,
            username: self.username().unwrap_or_default(),
            avatar_url: self.avatar_url().unwrap_or_default(),
        }
    }
}

impl<H: HttpClient> Webhook<H> {
    /// Posts a plain text message.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] if the request could not be made
    /// and [`WebhookError::Remote`] for a 4xx/5xx response.
    pub async fn send(&self, content: &str) -> Result<(), WebhookError> {
        self.post_json(self.payload(content, &[])).await
    }

    /// Posts a message holding a single embed.
    ///
    /// The builder is only read; it can be reused or extended afterwards.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn send_embed(&self, embed: &EmbedBuilder) -> Result<(), WebhookError> {
        let embeds = std::slice::from_ref(embed.as_embed());
        self.post_json(self.payload("", embeds)).await
    }

    /// Uploads a file as a multipart form.
    ///
    /// Relative paths are resolved against the current working directory.
    /// The file is read and closed before the request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::FileAccess`] if the file cannot be read, in
    /// which case no request is made. Otherwise same as [`send`](Self::send).
    pub async fn send_file(&self, path: impl AsRef<Path>) -> Result<(), WebhookError> {
        let path = resolve_path(path.as_ref())?;
        let file_name = file_name_of(&path)?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| WebhookError::FileAccess {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), size = bytes.len(), "Uploading file");

        let form = payload::file_form(
            self.avatar_url().unwrap_or_default(),
            self.username().unwrap_or_default(),
            file_name,
            bytes,
        );
        let request = HttpRequest::post(self.endpoint.as_str())
            .with_header(
                http::header::USER_AGENT,
                HeaderValue::from_static(USER_AGENT),
            )
            .with_multipart(form);

        self.execute(request).await.map(drop)
    }

    /// Deletes the webhook.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn delete(&self) -> Result<(), WebhookError> {
        self.delete_raw().await.map(drop)
    }

    /// Deletes the webhook and returns the response body as text.
    ///
    /// Invalid UTF-8 in the body is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn delete_raw(&self) -> Result<String, WebhookError> {
        let response = self
            .execute(HttpRequest::delete(self.endpoint.as_str()))
            .await?;

        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    async fn post_json(&self, payload: Payload<'_>) -> Result<(), WebhookError> {
        let body = payload.to_json()?;
        let request = HttpRequest::post(self.endpoint.as_str())
            .with_header(
                http::header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::USER_AGENT,
                HeaderValue::from_static(USER_AGENT),
            )
            .with_body(body);

        self.execute(request).await.map(drop)
    }

    /// Sends one request and maps 4xx/5xx statuses to errors.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, WebhookError> {
        let method = request.method.clone();
        let response = self.client.request(request).await?;

        debug!(%method, status = %response.status, "Webhook responded");

        if response.is_error() {
            return Err(WebhookError::Remote {
                status: response.status,
                body: response
                    .body_text()
                    .filter(|text| !text.is_empty())
                    .map(ToString::to_string),
            });
        }

        Ok(response)
    }
}

/// Checks a username override.
///
/// Length is counted in UTF-8 bytes.
///
/// # Errors
///
/// Returns [`ValidationError::UsernameTooLong`] for [`USERNAME_LIMIT`] or
/// more bytes.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let length = username.len();
    if length >= USERNAME_LIMIT {
        return Err(ValidationError::UsernameTooLong {
            length,
            limit: USERNAME_LIMIT,
        });
    }
    Ok(())
}

/// Checks an avatar override.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAvatarUrl`] unless the value parses as
/// an absolute URL with a non-empty scheme and host.
pub fn validate_avatar_url(avatar_url: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidAvatarUrl {
        url: avatar_url.to_string(),
        reason,
    };

    let url = url::Url::parse(avatar_url).map_err(|e| invalid(e.to_string()))?;

    if url.scheme().is_empty() {
        return Err(invalid("missing scheme".to_string()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

fn resolve_path(path: &Path) -> Result<PathBuf, WebhookError> {
    let cwd = std::env::current_dir().map_err(|source| WebhookError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    // Absolute paths replace the base in `join`.
    Ok(cwd.join(path))
}

fn file_name_of(path: &Path) -> Result<String, WebhookError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| WebhookError::FileAccess {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path does not name a file",
            ),
        })
}
