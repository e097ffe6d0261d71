use super::prelude::*;

pub struct PersonRepo<'a> {
    pool: &'a DbPool,
}

impl<'a> PersonRepo<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, person: &NewPerson) -> Result<i64, sqlx_core::Error> {
        fetch_scalar!(
            self.pool,
            i64,
            pg: r#"
            INSERT INTO people (name, gender, birth_year, height, hair_color, eye_color)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
            sqlite: r#"
            INSERT INTO people (name, gender, birth_year, height, hair_color, eye_color)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
            person.name.as_str(),
            person.gender.as_deref(),
            person.birth_year.as_deref(),
            person.height.as_deref(),
            person.hair_color.as_deref(),
            person.eye_color.as_deref()
        )
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Person>, sqlx_core::Error> {
        fetch_as!(
            self.pool,
            Person,
            fetch_optional,
            pg: r#"
            SELECT id, name, gender, birth_year, height, hair_color, eye_color
            FROM people
            WHERE id = $1
            "#,
            sqlite: r#"
            SELECT id, name, gender, birth_year, height, hair_color, eye_color
            FROM people
            WHERE id = ?1
            "#,
            id
        )
    }

    pub async fn list(&self) -> Result<Vec<Person>, sqlx_core::Error> {
        const SQL: &str = r#"
            SELECT id, name, gender, birth_year, height, hair_color, eye_color
            FROM people
            ORDER BY id ASC
            "#;
        fetch_as!(self.pool, Person, fetch_all, pg: SQL, sqlite: SQL)
    }

    /// First `limit` rows in id order.
    pub async fn list_first(&self, limit: i64) -> Result<Vec<Person>, sqlx_core::Error> {
        fetch_as!(
            self.pool,
            Person,
            fetch_all,
            pg: r#"
            SELECT id, name, gender, birth_year, height, hair_color, eye_color
            FROM people
            ORDER BY id ASC
            LIMIT $1
            "#,
            sqlite: r#"
            SELECT id, name, gender, birth_year, height, hair_color, eye_color
            FROM people
            ORDER BY id ASC
            LIMIT ?1
            "#,
            limit
        )
    }

    pub async fn count(&self) -> Result<i64, sqlx_core::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM people";
        fetch_scalar!(self.pool, i64, pg: SQL, sqlite: SQL)
    }
}
