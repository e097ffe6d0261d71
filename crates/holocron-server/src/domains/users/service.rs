use holocron_core::{Person, Planet, User};
use holocron_db::repo::{PersonRepo, PlanetRepo, UserRepo};

use crate::app::AppState;
use crate::domains::errors::ServiceError;
use crate::infra::metrics;

pub const GREETING: &str = "Hello, this is your GET /user response ";

pub struct Favorites {
    pub user: User,
    pub people: Vec<Person>,
    pub planets: Vec<Planet>,
}

pub async fn list_users(state: &AppState) -> Result<Vec<User>, ServiceError> {
    let repo = UserRepo::new(&state.db);
    repo.list().await.map_err(|err| {
        metrics::db_error("users_list");
        tracing::error!(event = "users_list_failed", error = %err, "DB error");
        ServiceError::DbError
    })
}

/// Looks up the configured favorites user and returns the first rows of
/// people and planets in id order.
pub async fn favorites(state: &AppState) -> Result<Favorites, ServiceError> {
    let user_id = state.config.favorites.user_id;
    let limit = i64::from(state.config.favorites.limit);

    let user = match UserRepo::new(&state.db).get_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(event = "favorites_user_missing", user_id, "User not found");
            return Err(ServiceError::NotFound("User not found"));
        }
        Err(err) => return Err(favorites_db_error("user", user_id, &err)),
    };

    let people = PersonRepo::new(&state.db)
        .list_first(limit)
        .await
        .map_err(|err| favorites_db_error("people", user_id, &err))?;
    let planets = PlanetRepo::new(&state.db)
        .list_first(limit)
        .await
        .map_err(|err| favorites_db_error("planets", user_id, &err))?;

    tracing::info!(
        event = "favorites_loaded",
        user_id,
        people = people.len(),
        planets = planets.len()
    );
    Ok(Favorites {
        user,
        people,
        planets,
    })
}

fn favorites_db_error(stage: &'static str, user_id: i64, err: &sqlx_core::Error) -> ServiceError {
    metrics::db_error("users_favorites");
    tracing::error!(
        event = "favorites_failed",
        stage,
        user_id,
        error = %err,
        "DB error"
    );
    ServiceError::DbError
}
