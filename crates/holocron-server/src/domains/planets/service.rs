use holocron_core::Planet;
use holocron_db::repo::PlanetRepo;

use crate::app::AppState;
use crate::domains::errors::ServiceError;
use crate::http::extract::RecordId;
use crate::infra::metrics;

pub async fn list_planets(state: &AppState) -> Result<Vec<Planet>, ServiceError> {
    let repo = PlanetRepo::new(&state.db);
    repo.list().await.map_err(|err| {
        metrics::db_error("planets_list");
        tracing::error!(event = "planets_list_failed", error = %err, "DB error");
        ServiceError::DbError
    })
}

pub async fn get_planet(state: &AppState, id: RecordId) -> Result<Planet, ServiceError> {
    let RecordId::Id(id) = id else {
        tracing::debug!(event = "planet_id_out_of_range");
        return Err(ServiceError::NotFound("Planet not found"));
    };
    let repo = PlanetRepo::new(&state.db);
    let planet = repo.get_by_id(id).await.map_err(|err| {
        metrics::db_error("planets_get");
        tracing::error!(event = "planet_get_failed", planet_id = id, error = %err, "DB error");
        ServiceError::DbError
    })?;
    planet.ok_or(ServiceError::NotFound("Planet not found"))
}
