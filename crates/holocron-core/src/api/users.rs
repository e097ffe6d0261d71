use schemars::JsonSchema;
use serde::Serialize;

use crate::api::{PersonResponse, PlanetResponse};
use crate::User;

/// Public view of a [`User`]; carries no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FavoritesResponse {
    pub user_id: i64,
    pub people: Vec<PersonResponse>,
    pub planets: Vec<PlanetResponse>,
}
