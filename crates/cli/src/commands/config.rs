//! Configuration check.
//!
//! Loads the server configuration exactly as `iad-server` would and logs the
//! result with secrets redacted.

use iad_server::config::ServerConfig;

use super::CliError;

/// Load and validate the server configuration.
///
/// # Errors
///
/// Returns the configuration error that would stop the server from starting.
pub fn check() -> Result<(), CliError> {
    let config = ServerConfig::from_env()?;

    tracing::info!(
        addr = %config.socket_addr(),
        slack = ?config.slack(),
        sentry = config.sentry_dsn.is_some(),
        "Configuration is valid"
    );
    for warning in config.slack().secret_warnings() {
        tracing::warn!("{warning}");
    }

    Ok(())
}
