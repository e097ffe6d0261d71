#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]

extern crate sqlx_core as sqlx;

use sqlx_core::pool::{Pool, PoolOptions};
use sqlx_postgres::{PgConnectOptions, Postgres};
use sqlx_sqlite::{Sqlite, SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

pub mod repo;

pub type PgPool = Pool<Postgres>;
pub type SqlitePool = Pool<Sqlite>;

pub const DEFAULT_POOL_MAX: u32 = 10;

/// Connection pool for whichever backend the database URL selected.
#[derive(Debug, Clone)]
pub enum DbPool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Picks the backend from the URL scheme. Both `postgres://` and
    /// `postgresql://` are accepted.
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split_once(':').map(|(scheme, _)| scheme)?;
        match scheme.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

impl DbPool {
    pub fn backend(&self) -> Backend {
        match self {
            Self::Postgres(_) => Backend::Postgres,
            Self::Sqlite(_) => Backend::Sqlite,
        }
    }

    pub async fn ping(&self) -> Result<(), sqlx_core::Error> {
        match self {
            Self::Postgres(pool) => sqlx_core::query::query::<Postgres>("SELECT 1")
                .execute(pool)
                .await
                .map(|_| ()),
            Self::Sqlite(pool) => sqlx_core::query::query::<Sqlite>("SELECT 1")
                .execute(pool)
                .await
                .map(|_| ()),
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}

pub async fn connect(url: &str) -> Result<DbPool, sqlx_core::Error> {
    connect_with_max(url, DEFAULT_POOL_MAX).await
}

pub async fn connect_with_max(url: &str, max_connections: u32) -> Result<DbPool, sqlx_core::Error> {
    match Backend::from_url(url) {
        Some(Backend::Postgres) => connect_postgres_with_max(url, max_connections)
            .await
            .map(DbPool::Postgres),
        Some(Backend::Sqlite) => connect_sqlite_with_max(url, max_connections)
            .await
            .map(DbPool::Sqlite),
        None => Err(sqlx_core::Error::Configuration(
            format!("unsupported database url scheme: {}", redact_url(url)).into(),
        )),
    }
}

pub async fn connect_postgres_with_max(
    url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx_core::Error> {
    let options = PgConnectOptions::from_str(url)?;
    PoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn connect_sqlite_with_max(
    url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx_core::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    PoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn migrate(pool: &DbPool) -> Result<(), sqlx_core::migrate::MigrateError> {
    match pool {
        DbPool::Postgres(pool) => sqlx_macros::migrate!("./migrations/postgres").run(pool).await,
        DbPool::Sqlite(pool) => sqlx_macros::migrate!("./migrations/sqlite").run(pool).await,
    }
}

/// Strips credentials from a connection URL so it can be logged.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.split_once('@') {
        Some((_, host)) => format!("{scheme}://***@{host}"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_follows_url_scheme() {
        assert_eq!(
            Backend::from_url("postgres://user:pw@localhost/db"),
            Some(Backend::Postgres)
        );
        assert_eq!(
            Backend::from_url("postgresql://localhost/db"),
            Some(Backend::Postgres)
        );
        assert_eq!(
            Backend::from_url("sqlite:///tmp/test.db"),
            Some(Backend::Sqlite)
        );
        assert_eq!(Backend::from_url("sqlite::memory:"), Some(Backend::Sqlite));
        assert_eq!(Backend::from_url("mysql://localhost/db"), None);
        assert_eq!(Backend::from_url("no-scheme"), None);
    }

    #[test]
    fn redact_url_hides_credentials() {
        assert_eq!(
            redact_url("postgres://user:secret@db:5432/app"),
            "postgres://***@db:5432/app"
        );
        assert_eq!(redact_url("sqlite:///tmp/test.db"), "sqlite:///tmp/test.db");
    }

    #[tokio::test]
    async fn connect_rejects_unknown_scheme() {
        let err = connect("mysql://root:pw@localhost/app")
            .await
            .expect_err("mysql is not supported");
        let message = err.to_string();
        assert!(message.contains("unsupported database url scheme"));
        assert!(!message.contains("pw"));
    }
}
