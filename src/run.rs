//! Application execution logic.
//!
//! Builds a webhook from the validated configuration and runs one
//! subcommand against it.

use std::sync::Arc;

use thiserror::Error;

use chathook::config::{ValidatedConfig, WebhookCommand};
use chathook::embed::EmbedBuilder;
use chathook::webhook::{HttpClient, ReqwestClient, ValidationError, Webhook, WebhookError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// An override was rejected by the webhook.
    #[error(transparent)]
    Override(#[from] ValidationError),

    /// The webhook operation failed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

/// Executes a single subcommand with the given configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the webhook
/// operation fails.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, action: &WebhookCommand) -> Result<(), RunError> {
    let http = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(RunError::ClientBuild)?;
    let webhook = create_webhook(&config, Arc::new(ReqwestClient::from_client(http)))?;

    dispatch(&webhook, action).await
}

/// Creates a webhook for the configured endpoint and applies the overrides.
fn create_webhook<H>(config: &ValidatedConfig, client: Arc<H>) -> Result<Webhook<H>, RunError> {
    let mut webhook = Webhook::with_client(config.url.clone(), client);

    if let Some(ref username) = config.username {
        webhook.set_username(username.as_str())?;
    }
    if let Some(ref avatar_url) = config.avatar_url {
        webhook.set_avatar(avatar_url.as_str())?;
    }

    Ok(webhook)
}

/// Runs one webhook subcommand.
async fn dispatch<H: HttpClient>(
    webhook: &Webhook<H>,
    action: &WebhookCommand,
) -> Result<(), RunError> {
    match action {
        WebhookCommand::Send { content } => {
            webhook.send(content).await?;
            tracing::info!("Message sent");
        }
        WebhookCommand::Embed(args) => {
            let embed = EmbedBuilder::from(args);
            webhook.send_embed(&embed).await?;
            tracing::info!(fields = embed.as_embed().fields.len(), "Embed sent");
        }
        WebhookCommand::File { path } => {
            webhook.send_file(path).await?;
            tracing::info!("File uploaded: {}", path.display());
        }
        WebhookCommand::Delete => {
            let body = webhook.delete_raw().await?;
            tracing::info!("Webhook deleted");
            if !body.is_empty() {
                tracing::debug!("Delete response: {body}");
            }
        }
    }

    Ok(())
}
