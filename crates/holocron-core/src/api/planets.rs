use schemars::JsonSchema;
use serde::Serialize;

use crate::Planet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct PlanetResponse {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
            diameter: planet.diameter,
            gravity: planet.gravity,
        }
    }
}
