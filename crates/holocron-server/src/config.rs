use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerRuntimeConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerRuntimeConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Empty means any origin is allowed.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_pool_max")]
    pub pool_max: u32,
    #[serde(default = "default_true")]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            pool_max: default_pool_max(),
            auto_migrate: default_true(),
        }
    }
}

/// The favorites endpoint answers for a single configured user and returns
/// the first `limit` people and planets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_favorites_user_id")]
    pub user_id: i64,
    #[serde(default = "default_favorites_limit")]
    pub limit: u32,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            user_id: default_favorites_user_id(),
            limit: default_favorites_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_metrics_endpoint")]
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_metrics_endpoint(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_pool_max() -> u32 {
    holocron_db::DEFAULT_POOL_MAX
}

fn default_favorites_user_id() -> i64 {
    1
}

fn default_favorites_limit() -> u32 {
    2
}

fn default_metrics_endpoint() -> String {
    "/metrics".to_string()
}
