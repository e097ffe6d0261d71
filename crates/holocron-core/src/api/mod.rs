pub mod people;
pub mod planets;
pub mod users;

pub use people::PersonResponse;
pub use planets::PlanetResponse;
pub use users::{FavoritesResponse, UserResponse};
