use std::fmt;

/// Account row. `password` is write-only: it is never serialized and
/// never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    /// Already hashed; this type never sees a plaintext password.
    pub password: String,
    pub is_active: bool,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
}
