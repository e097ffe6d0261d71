pub mod error;
pub mod extract;
pub mod openapi;
pub mod routes;

pub use routes::router;
