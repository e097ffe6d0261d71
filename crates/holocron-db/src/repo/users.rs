use super::prelude::*;

pub struct UserRepo<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &NewUser) -> Result<i64, sqlx_core::Error> {
        fetch_scalar!(
            self.pool,
            i64,
            pg: r#"
            INSERT INTO users (email, password, is_active)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
            sqlite: r#"
            INSERT INTO users (email, password, is_active)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
            user.email.as_str(),
            user.password.as_str(),
            user.is_active
        )
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>, sqlx_core::Error> {
        fetch_as!(
            self.pool,
            User,
            fetch_optional,
            pg: r#"
            SELECT id, email, password, is_active
            FROM users
            WHERE id = $1
            "#,
            sqlite: r#"
            SELECT id, email, password, is_active
            FROM users
            WHERE id = ?1
            "#,
            id
        )
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, sqlx_core::Error> {
        fetch_as!(
            self.pool,
            User,
            fetch_optional,
            pg: r#"
            SELECT id, email, password, is_active
            FROM users
            WHERE email = $1
            "#,
            sqlite: r#"
            SELECT id, email, password, is_active
            FROM users
            WHERE email = ?1
            "#,
            email
        )
    }

    pub async fn list(&self) -> Result<Vec<User>, sqlx_core::Error> {
        const SQL: &str = r#"
            SELECT id, email, password, is_active
            FROM users
            ORDER BY id ASC
            "#;
        fetch_as!(self.pool, User, fetch_all, pg: SQL, sqlite: SQL)
    }

    pub async fn count(&self) -> Result<i64, sqlx_core::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM users";
        fetch_scalar!(self.pool, i64, pg: SQL, sqlite: SQL)
    }
}
