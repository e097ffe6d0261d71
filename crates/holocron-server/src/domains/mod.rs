pub mod errors;
pub mod people;
pub mod planets;
pub mod users;
