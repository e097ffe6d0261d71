use super::prelude::*;

pub struct PlanetRepo<'a> {
    pool: &'a DbPool,
}

impl<'a> PlanetRepo<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, planet: &NewPlanet) -> Result<i64, sqlx_core::Error> {
        fetch_scalar!(
            self.pool,
            i64,
            pg: r#"
            INSERT INTO planets (name, climate, terrain, population, diameter, gravity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
            sqlite: r#"
            INSERT INTO planets (name, climate, terrain, population, diameter, gravity)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
            planet.name.as_str(),
            planet.climate.as_deref(),
            planet.terrain.as_deref(),
            planet.population.as_deref(),
            planet.diameter.as_deref(),
            planet.gravity.as_deref()
        )
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Planet>, sqlx_core::Error> {
        fetch_as!(
            self.pool,
            Planet,
            fetch_optional,
            pg: r#"
            SELECT id, name, climate, terrain, population, diameter, gravity
            FROM planets
            WHERE id = $1
            "#,
            sqlite: r#"
            SELECT id, name, climate, terrain, population, diameter, gravity
            FROM planets
            WHERE id = ?1
            "#,
            id
        )
    }

    pub async fn list(&self) -> Result<Vec<Planet>, sqlx_core::Error> {
        const SQL: &str = r#"
            SELECT id, name, climate, terrain, population, diameter, gravity
            FROM planets
            ORDER BY id ASC
            "#;
        fetch_as!(self.pool, Planet, fetch_all, pg: SQL, sqlite: SQL)
    }

    pub async fn list_first(&self, limit: i64) -> Result<Vec<Planet>, sqlx_core::Error> {
        fetch_as!(
            self.pool,
            Planet,
            fetch_all,
            pg: r#"
            SELECT id, name, climate, terrain, population, diameter, gravity
            FROM planets
            ORDER BY id ASC
            LIMIT $1
            "#,
            sqlite: r#"
            SELECT id, name, climate, terrain, population, diameter, gravity
            FROM planets
            ORDER BY id ASC
            LIMIT ?1
            "#,
            limit
        )
    }

    pub async fn count(&self) -> Result<i64, sqlx_core::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM planets";
        fetch_scalar!(self.pool, i64, pg: SQL, sqlite: SQL)
    }
}
