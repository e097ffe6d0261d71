//! One repository per table. Every query is written once per backend since
//! placeholders differ (`$1` for Postgres, `?1` for SQLite).

macro_rules! fetch_as {
    ($pool:expr, $ty:ty, $method:ident, pg: $pg:expr, sqlite: $sqlite:expr $(, $arg:expr)* $(,)?) => {{
        match $pool {
            $crate::DbPool::Postgres(pool) => {
                #[allow(unused_mut)]
                let mut q = sqlx_core::query_as::query_as::<sqlx_postgres::Postgres, $ty>($pg);
                $(q = q.bind($arg);)*
                q.$method(pool).await
            }
            $crate::DbPool::Sqlite(pool) => {
                #[allow(unused_mut)]
                let mut q = sqlx_core::query_as::query_as::<sqlx_sqlite::Sqlite, $ty>($sqlite);
                $(q = q.bind($arg);)*
                q.$method(pool).await
            }
        }
    }};
}

macro_rules! fetch_scalar {
    ($pool:expr, $ty:ty, pg: $pg:expr, sqlite: $sqlite:expr $(, $arg:expr)* $(,)?) => {{
        match $pool {
            $crate::DbPool::Postgres(pool) => {
                #[allow(unused_mut)]
                let mut q =
                    sqlx_core::query_scalar::query_scalar::<sqlx_postgres::Postgres, $ty>($pg);
                $(q = q.bind($arg);)*
                q.fetch_one(pool).await
            }
            $crate::DbPool::Sqlite(pool) => {
                #[allow(unused_mut)]
                let mut q =
                    sqlx_core::query_scalar::query_scalar::<sqlx_sqlite::Sqlite, $ty>($sqlite);
                $(q = q.bind($arg);)*
                q.fetch_one(pool).await
            }
        }
    }};
}

pub(crate) mod prelude {
    pub(crate) use crate::DbPool;
    pub(crate) use holocron_core::{NewPerson, NewPlanet, NewUser, Person, Planet, User};
}

mod people;
mod planets;
mod users;

pub use people::PersonRepo;
pub use planets::PlanetRepo;
pub use users::UserRepo;
