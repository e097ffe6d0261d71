mod from_row;
mod structs;
#[cfg(test)]
mod tests;

pub use structs::{NewPerson, NewPlanet, NewUser, Person, Planet, User};
