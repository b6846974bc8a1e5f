pub mod connection;
pub mod failure;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::*;
pub use failure::StorageFailure;
pub use models::*;
