use schemars::JsonSchema;
use serde::Serialize;

use crate::Person;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            gender: person.gender,
            birth_year: person.birth_year,
            height: person.height,
            hair_color: person.hair_color,
            eye_color: person.eye_color,
        }
    }
}
