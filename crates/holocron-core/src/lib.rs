#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod models;

pub use crate::api::*;
pub use crate::models::*;
