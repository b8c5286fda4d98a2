//! Process-level glue for the `chathook` binary: exit codes, hints for
//! configuration mistakes, and the tracing subscriber.

use chathook::config::{ConfigError, field};
use chathook::webhook::ValidationError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Exit codes reported by `chathook`.
pub mod exit_code {
    use std::process::ExitCode;

    /// The request went through, or `init` wrote its template.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Nothing was sent: no webhook URL, a malformed URL or config file,
    /// or a username/avatar override the webhook would reject.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// A request was attempted and failed: the endpoint answered 4xx/5xx,
    /// the connection or timeout failed, or the attachment was unreadable.
    ///
    /// `ExitCode::from` is not `const`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Suggests a next step for a configuration error, if there is an obvious one.
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::URL => {
            Some("Pass --url, or run 'chathook init' and set webhook.url in the generated file.")
        }
        ConfigError::FileRead { .. } => {
            Some("Run 'chathook init' to generate a configuration template.")
        }
        ConfigError::InvalidUrl { .. } => Some(
            "The webhook URL must be absolute http(s), e.g. https://host/api/webhooks/<id>/<token>.",
        ),
        ConfigError::InvalidOverride(ValidationError::UsernameTooLong { .. }) => {
            Some("Shorten --username (or webhook.username).")
        }
        ConfigError::InvalidOverride(ValidationError::InvalidAvatarUrl { .. }) => {
            Some("--avatar-url needs a full URL with scheme and host, e.g. https://cdn.example.com/a.png.")
        }
        _ => None,
    }
}

/// Prints the hint for `error` to stderr.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Installs the global subscriber; `RUST_LOG` overrides the default level.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
