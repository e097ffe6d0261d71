pub mod metrics;
pub mod passwords;
