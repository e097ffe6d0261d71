#[cfg(any(feature = "postgres", feature = "sqlite"))]
use sqlx_core::from_row::FromRow;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use sqlx_core::row::Row;
#[cfg(feature = "postgres")]
use sqlx_postgres::PgRow;
#[cfg(feature = "sqlite")]
use sqlx_sqlite::SqliteRow;

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use super::*;

macro_rules! impl_from_row {
    ($ty:ty, $row:ident => $body:block) => {
        #[cfg(feature = "sqlite")]
        impl FromRow<'_, SqliteRow> for $ty {
            fn from_row($row: &SqliteRow) -> Result<Self, sqlx_core::Error> {
                $body
            }
        }

        #[cfg(feature = "postgres")]
        impl FromRow<'_, PgRow> for $ty {
            fn from_row($row: &PgRow) -> Result<Self, sqlx_core::Error> {
                $body
            }
        }
    };
}

impl_from_row!(User, row => {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            is_active: row.try_get("is_active")?,
        })
    }
);

impl_from_row!(Person, row => {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            gender: row.try_get("gender")?,
            birth_year: row.try_get("birth_year")?,
            height: row.try_get("height")?,
            hair_color: row.try_get("hair_color")?,
            eye_color: row.try_get("eye_color")?,
        })
    }
);

impl_from_row!(Planet, row => {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            climate: row.try_get("climate")?,
            terrain: row.try_get("terrain")?,
            population: row.try_get("population")?,
            diameter: row.try_get("diameter")?,
            gravity: row.try_get("gravity")?,
        })
    }
);
