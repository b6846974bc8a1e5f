pub mod db;
pub mod errors;
pub mod handlers;
pub mod invalidation;
pub mod models;
pub mod validation;

pub struct AppState {
    pub pool: db::connection::SqlitePool,
}
