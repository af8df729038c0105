//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, Duration, LinuxConfig, WindowsConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS, VALID_LOG_LEVELS};
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

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

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
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };
    let boolean = || {
        parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))
    };

    match key {
        "restore_clipboard" => config.restore_clipboard = Some(boolean()?),
        "notify" => config.notify = Some(boolean()?),
        "cache_ttl" => {
            let ttl = value
                .parse::<Duration>()
                .map_err(|e| invalid(e.to_string()))?;
            config.cache_ttl = Some(ttl.to_string());
        }
        "log_level" => {
            let level = value.to_lowercase();
            if !VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(invalid(format!(
                    "Invalid value '{}'. Valid options: {}",
                    value,
                    VALID_LOG_LEVELS.join(", ")
                )));
            }
            config.log_level = Some(level);
        }
        "linux.terminal_detection" => {
            let enabled = boolean()?;
            config
                .linux
                .get_or_insert_with(LinuxConfig::default)
                .terminal_detection = Some(enabled);
        }
        "linux.extra_terminals" => {
            let terminals: Vec<String> = value
                .split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
            config
                .linux
                .get_or_insert_with(LinuxConfig::default)
                .extra_terminals = (!terminals.is_empty()).then_some(terminals);
        }
        "windows.fast_paste_path" => {
            let path = value.trim();
            config
                .windows
                .get_or_insert_with(WindowsConfig::default)
                .fast_paste_path = (!path.is_empty()).then(|| path.to_string());
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}

/// Display form of a stored value
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    let linux = config.linux.as_ref();
    match key {
        "restore_clipboard" => config.restore_clipboard.map(|b| b.to_string()),
        "cache_ttl" => config.cache_ttl.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        "log_level" => config.log_level.clone(),
        "linux.terminal_detection" => linux
            .and_then(|l| l.terminal_detection)
            .map(|b| b.to_string()),
        "linux.extra_terminals" => linux
            .and_then(|l| l.extra_terminals.as_ref())
            .map(|t| t.join(",")),
        "windows.fast_paste_path" => config
            .windows
            .as_ref()
            .and_then(|w| w.fast_paste_path.clone()),
        _ => None,
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(key: &str, value: &str) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::empty();
        apply_value(&mut config, key, value)?;
        Ok(config)
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn cache_ttl_is_normalized() {
        let config = set("cache_ttl", "90s").unwrap();
        assert_eq!(config.cache_ttl.as_deref(), Some("1m30s"));
    }

    #[test]
    fn cache_ttl_rejects_garbage() {
        assert!(set("cache_ttl", "soon").is_err());
    }

    #[test]
    fn log_level_is_validated() {
        assert_eq!(set("log_level", "DEBUG").unwrap().log_level.as_deref(), Some("debug"));
        assert!(set("log_level", "loud").is_err());
    }

    #[test]
    fn extra_terminals_split_on_commas() {
        let config = set("linux.extra_terminals", "Rio, cosmic-term,").unwrap();
        assert_eq!(config.extra_terminals_or_default(), ["rio", "cosmic-term"]);
        assert_eq!(
            read_value(&config, "linux.extra_terminals").as_deref(),
            Some("rio,cosmic-term")
        );
    }

    #[test]
    fn terminal_detection_toggle() {
        let config = set("linux.terminal_detection", "false").unwrap();
        assert!(!config.terminal_detection_or_default());
        assert!(set("linux.terminal_detection", "sometimes").is_err());
    }

    #[test]
    fn fast_paste_path_round_trips() {
        let config = set("windows.fast_paste_path", "C:/bin/fp.exe").unwrap();
        assert_eq!(config.fast_paste_path(), Some("C:/bin/fp.exe"));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(check_key("api_key").is_err());
        assert!(check_key("notify").is_ok());
    }

    #[test]
    fn unset_values_read_as_none() {
        let config = AppConfig::empty();
        for key in VALID_CONFIG_KEYS {
            assert!(read_value(&config, key).is_none(), "{} should be unset", key);
        }
    }
}
