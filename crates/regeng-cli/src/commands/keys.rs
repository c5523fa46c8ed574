//! `rge keys`: API key administration.

use regeng_client::admin::ADMIN_KEY_HEADER;
use regeng_config::{ConfigError, RegEngineConfig};
use regeng_query::Queries;

use crate::cli::{KeysCommands, OutputFormat};
use crate::output;

pub async fn handle(
    action: &KeysCommands,
    config: &RegEngineConfig,
    queries: &Queries,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let admin_key = require_admin_key(config)?;

    match action {
        KeysCommands::Create { description } => {
            let record = queries
                .create_api_key(admin_key, description.as_deref())
                .await?;
            // The one and only time the plaintext secret is visible.
            output::output(&record, format)?;
            if show_secret_reminder(format, quiet) {
                eprintln!("store the api_key value now; it will not be shown again");
            }
            Ok(())
        }
        KeysCommands::List => {
            let records = queries.api_keys(admin_key).await?;
            output::output(&records, format)
        }
        KeysCommands::Revoke { key_id } => {
            queries.revoke_api_key(admin_key, key_id).await?;
            output::output(&serde_json::json!({ "revoked": key_id }), format)
        }
    }
}

/// The reminder is interactive chatter; keep it out of quiet mode and the
/// machine-readable formats, which are made to be piped.
fn show_secret_reminder(format: OutputFormat, quiet: bool) -> bool {
    !quiet && matches!(format, OutputFormat::Table)
}

fn require_admin_key(config: &RegEngineConfig) -> anyhow::Result<&str> {
    if config.auth.has_admin_key() {
        Ok(&config.auth.admin_key)
    } else {
        Err(ConfigError::MissingCredential {
            header: ADMIN_KEY_HEADER,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_reminder_only_in_interactive_table_mode() {
        assert!(show_secret_reminder(OutputFormat::Table, false));
        assert!(!show_secret_reminder(OutputFormat::Table, true));
        assert!(!show_secret_reminder(OutputFormat::Json, false));
        assert!(!show_secret_reminder(OutputFormat::Raw, false));
    }

    #[test]
    fn missing_admin_key_fails_before_any_call() {
        let config = RegEngineConfig::default();
        let err = require_admin_key(&config).unwrap_err();
        assert!(err.to_string().contains("X-Admin-Key"));
    }

    #[test]
    fn configured_admin_key_is_returned() {
        let config = RegEngineConfig {
            auth: regeng_config::AuthConfig {
                admin_key: "master".into(),
                api_key: String::new(),
            },
            ..Default::default()
        };
        assert_eq!(require_admin_key(&config).unwrap(), "master");
    }
}
