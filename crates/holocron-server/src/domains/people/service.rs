use holocron_core::Person;
use holocron_db::repo::PersonRepo;

use crate::app::AppState;
use crate::domains::errors::ServiceError;
use crate::http::extract::RecordId;
use crate::infra::metrics;

pub async fn list_people(state: &AppState) -> Result<Vec<Person>, ServiceError> {
    let repo = PersonRepo::new(&state.db);
    match repo.list().await {
        Ok(people) => {
            tracing::debug!(event = "people_listed", count = people.len());
            Ok(people)
        }
        Err(err) => {
            metrics::db_error("people_list");
            tracing::error!(event = "people_list_failed", error = %err, "DB error");
            Err(ServiceError::DbError)
        }
    }
}

pub async fn get_person(state: &AppState, id: RecordId) -> Result<Person, ServiceError> {
    let RecordId::Id(id) = id else {
        tracing::debug!(event = "person_id_out_of_range");
        return Err(ServiceError::NotFound("Person not found"));
    };
    let repo = PersonRepo::new(&state.db);
    match repo.get_by_id(id).await {
        Ok(Some(person)) => Ok(person),
        Ok(None) => {
            tracing::debug!(event = "person_not_found", person_id = id);
            Err(ServiceError::NotFound("Person not found"))
        }
        Err(err) => {
            metrics::db_error("people_get");
            tracing::error!(event = "person_get_failed", person_id = id, error = %err, "DB error");
            Err(ServiceError::DbError)
        }
    }
}
