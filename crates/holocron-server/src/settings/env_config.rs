use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::config::ServerConfig;

pub(super) fn load_config(path: &str) -> ServerConfig {
    if !Path::new(path).exists() {
        return ServerConfig::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(event = "config_read_failed", path, error = %err);
            return ServerConfig::default();
        }
    };
    match serde_yaml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            warn!(event = "config_parse_failed", path, error = %err);
            ServerConfig::default()
        }
    }
}

pub(super) fn apply_server_env_overrides(config: &mut ServerConfig) {
    if let Ok(value) = env::var("HOLOCRON_SERVER_NAME") {
        let trimmed = value.trim();
        config.server.name = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }
    if let Ok(value) = env::var("HOLOCRON_CORS_ALLOWED_ORIGINS") {
        config.server.cors_allowed_origins = parse_list(&value);
    }
}

pub(super) fn apply_database_env_overrides(config: &mut ServerConfig) {
    if let Some(pool_max) = parse_env::<u32>("HOLOCRON_DB_POOL_MAX") {
        if pool_max == 0 {
            warn!(event = "config_invalid", field = "HOLOCRON_DB_POOL_MAX", value = pool_max);
        } else {
            config.database.pool_max = pool_max;
        }
    }
    if let Ok(value) = env::var("HOLOCRON_AUTO_MIGRATE") {
        if let Some(enabled) = parse_bool(&value) {
            config.database.auto_migrate = enabled;
        } else {
            warn!(event = "config_invalid", field = "HOLOCRON_AUTO_MIGRATE", value = %value);
        }
    }
}

pub(super) fn apply_favorites_env_overrides(config: &mut ServerConfig) {
    if let Some(user_id) = parse_env::<i64>("HOLOCRON_FAVORITES_USER_ID") {
        config.favorites.user_id = user_id;
    }
    if let Some(limit) = parse_env::<u32>("HOLOCRON_FAVORITES_LIMIT") {
        config.favorites.limit = limit;
    }
}

pub(super) fn apply_metrics_env_overrides(config: &mut ServerConfig) {
    if let Ok(value) = env::var("HOLOCRON_METRICS_ENABLED") {
        if let Some(enabled) = parse_bool(&value) {
            config.metrics.enabled = enabled;
        } else {
            warn!(event = "config_invalid", field = "HOLOCRON_METRICS_ENABLED", value = %value);
        }
    }
    if let Ok(value) = env::var("HOLOCRON_METRICS_ENDPOINT") {
        let trimmed = value.trim().trim_end_matches('/');
        if trimmed.starts_with('/') {
            config.metrics.endpoint = trimmed.to_string();
        } else {
            warn!(event = "config_invalid", field = "HOLOCRON_METRICS_ENDPOINT", value = %value);
        }
    }
}

fn parse_env<T: FromStr>(name: &'static str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(event = "config_invalid", field = name, value = %value);
            None
        }
    }
}

pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(super) fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
