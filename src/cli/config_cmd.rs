//! Config command handler

use chrono::format::{Item, StrftimeItems};

use crate::application::ports::ConfigStore;
use crate::domain::config::ClipboardTool;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "host_url" => config.host_url = Some(value.trim_end_matches('/').to_string()),
        "refresh_interval_ms" => config.refresh_interval_ms = Some(parse_interval(key, value)?),
        "clipboard_tool" => config.clipboard_tool = Some(value.to_lowercase()),
        "time_format" => config.time_format = Some(value.to_string()),
        "html_output" => config.html_output = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "host_url" => config.host_url,
        "refresh_interval_ms" => config.refresh_interval_ms.map(|ms| ms.to_string()),
        "clipboard_tool" => config.clipboard_tool,
        "time_format" => config.time_format,
        "html_output" => config.html_output,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("host_url", config.host_url.as_deref().unwrap_or(NOT_SET));
    presenter.key_value(
        "refresh_interval_ms",
        &config
            .refresh_interval_ms
            .map(|ms| ms.to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
    );
    presenter.key_value(
        "clipboard_tool",
        config.clipboard_tool.as_deref().unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "time_format",
        config.time_format.as_deref().unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "html_output",
        config.html_output.as_deref().unwrap_or(NOT_SET),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "host_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must start with http:// or https://".to_string(),
                });
            }
        }
        "refresh_interval_ms" => {
            parse_interval(key, value)?;
        }
        "clipboard_tool" => {
            value
                .parse::<ClipboardTool>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "time_format" => {
            let invalid = value.is_empty()
                || StrftimeItems::new(value).any(|item| matches!(item, Item::Error));
            if invalid {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!("Invalid time format '{}'", value),
                });
            }
        }
        _ => {} // html_output accepts any path
    }
    Ok(())
}

/// Parse a positive millisecond interval
fn parse_interval(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be a positive number of milliseconds".to_string(),
        }),
    }
}
