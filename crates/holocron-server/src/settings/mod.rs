use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use tracing::warn;

use crate::config::ServerConfig;

mod env_config;
#[cfg(test)]
mod tests;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub db_url: String,
    pub db_pool_max: u32,
    pub config: ServerConfig,
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        let addr = match env::var("HOLOCRON_ADDR") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!(event = "config_invalid", field = "HOLOCRON_ADDR", value = %value);
                default_addr()
            }),
            Err(_) => default_addr(),
        };
        let db_url = env::var("DATABASE_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let config_path =
            env::var("HOLOCRON_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
        let mut config = env_config::load_config(&config_path);
        env_config::apply_server_env_overrides(&mut config);
        env_config::apply_database_env_overrides(&mut config);
        env_config::apply_favorites_env_overrides(&mut config);
        env_config::apply_metrics_env_overrides(&mut config);
        let db_pool_max = config.database.pool_max;

        Self {
            addr,
            db_url,
            db_pool_max,
            config,
        }
    }
}

/// `0.0.0.0:$PORT`, falling back to port 3000.
fn default_addr() -> SocketAddr {
    let port = match env::var("PORT") {
        Ok(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
            warn!(event = "config_invalid", field = "PORT", value = %value);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}
