use super::*;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const ENV_VARS: &[&str] = &[
    "HOLOCRON_ADDR",
    "PORT",
    "DATABASE_URL",
    "HOLOCRON_CONFIG_PATH",
    "HOLOCRON_SERVER_NAME",
    "HOLOCRON_CORS_ALLOWED_ORIGINS",
    "HOLOCRON_DB_POOL_MAX",
    "HOLOCRON_AUTO_MIGRATE",
    "HOLOCRON_FAVORITES_USER_ID",
    "HOLOCRON_FAVORITES_LIMIT",
    "HOLOCRON_METRICS_ENABLED",
    "HOLOCRON_METRICS_ENDPOINT",
];

fn clear_env() {
    for name in ENV_VARS {
        env::remove_var(name);
    }
    // Point at a file that does not exist so a stray config.yaml in the
    // working directory cannot leak into the defaults.
    env::set_var(
        "HOLOCRON_CONFIG_PATH",
        std::env::temp_dir().join("holocron-test-config-missing.yaml"),
    );
}

fn write_config(name: &str, yaml: &str) {
    let path = std::env::temp_dir().join(format!(
        "holocron-test-config-{}-{}.yaml",
        std::process::id(),
        name
    ));
    std::fs::write(&path, yaml).expect("write config");
    env::set_var("HOLOCRON_CONFIG_PATH", path);
}

#[test]
fn defaults_without_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    clear_env();

    let settings = Settings::from_env();
    assert_eq!(settings.addr, "0.0.0.0:3000".parse().expect("addr"));
    assert_eq!(settings.db_url, DEFAULT_DATABASE_URL);
    assert_eq!(settings.db_pool_max, 10);
    assert_eq!(settings.config.favorites.user_id, 1);
    assert_eq!(settings.config.favorites.limit, 2);
    assert!(settings.config.database.auto_migrate);
    assert!(!settings.config.metrics.enabled);
}

#[test]
fn port_and_database_url_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    clear_env();
    env::set_var("PORT", "8081");
    env::set_var("DATABASE_URL", "postgres://holocron:pw@db:5432/holocron");

    let settings = Settings::from_env();
    assert_eq!(settings.addr, "0.0.0.0:8081".parse().expect("addr"));
    assert_eq!(settings.db_url, "postgres://holocron:pw@db:5432/holocron");

    clear_env();
}

#[test]
fn addr_overrides_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    clear_env();
    env::set_var("PORT", "8081");
    env::set_var("HOLOCRON_ADDR", "127.0.0.1:9000");

    let settings = Settings::from_env();
    assert_eq!(settings.addr, "127.0.0.1:9000".parse().expect("addr"));

    clear_env();
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    clear_env();
    env::set_var("PORT", "not-a-port");
    env::set_var("DATABASE_URL", "   ");
    env::set_var("HOLOCRON_DB_POOL_MAX", "0");
    env::set_var("HOLOCRON_FAVORITES_LIMIT", "-3");
    env::set_var("HOLOCRON_METRICS_ENABLED", "maybe");
    env::set_var("HOLOCRON_METRICS_ENDPOINT", "metrics");

    let settings = Settings::from_env();
    assert_eq!(settings.addr.port(), DEFAULT_PORT);
    assert_eq!(settings.db_url, DEFAULT_DATABASE_URL);
    assert_eq!(settings.db_pool_max, 10);
    assert_eq!(settings.config.favorites.limit, 2);
    assert!(!settings.config.metrics.enabled);
    assert_eq!(settings.config.metrics.endpoint, "/metrics");

    clear_env();
}

#[test]
fn metrics_endpoint_env_drops_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    clear_env();
    env::set_var("HOLOCRON_METRICS_ENDPOINT", "/internal/metrics/");

    let settings = Settings::from_env();
    assert_eq!(settings.config.metrics.endpoint, "/internal/metrics");

    env::set_var("HOLOCRON_METRICS_ENDPOINT", "/");
    let settings = Settings::from_env();
    assert_eq!(settings.config.metrics.endpoint, "/metrics");

    clear_env();
}

#[test]
fn config_file_is_applied_then_env_wins() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    clear_env();
    write_config(
        "overrides",
        "server:\n  name: holonet\n  cors_allowed_origins:\n    - https://a.example\ndatabase:\n  pool_max: 4\n  auto_migrate: false\nfavorites:\n  user_id: 7\n  limit: 3\n",
    );
    env::set_var("HOLOCRON_FAVORITES_LIMIT", "5");
    env::set_var(
        "HOLOCRON_CORS_ALLOWED_ORIGINS",
        "https://b.example, ,https://c.example",
    );

    let settings = Settings::from_env();
    assert_eq!(settings.config.server.name.as_deref(), Some("holonet"));
    assert_eq!(settings.db_pool_max, 4);
    assert!(!settings.config.database.auto_migrate);
    assert_eq!(settings.config.favorites.user_id, 7);
    assert_eq!(settings.config.favorites.limit, 5);
    assert_eq!(
        settings.config.server.cors_allowed_origins,
        vec!["https://b.example".to_string(), "https://c.example".to_string()]
    );

    clear_env();
}

#[test]
fn unparsable_config_file_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    clear_env();
    write_config("broken", "favorites: [not, a, map\n");

    let settings = Settings::from_env();
    assert_eq!(settings.config.favorites.user_id, 1);
    assert_eq!(settings.db_pool_max, 10);

    clear_env();
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for value in ["1", "true", "YES", " on "] {
        assert_eq!(env_config::parse_bool(value), Some(true), "{value}");
    }
    for value in ["0", "false", "No", "off"] {
        assert_eq!(env_config::parse_bool(value), Some(false), "{value}");
    }
    assert_eq!(env_config::parse_bool("maybe"), None);
}
