use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use log::info;

use inventory_backend::db::connection;
use inventory_backend::handlers;
use inventory_backend::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Config::builder()
        .add_source(config::File::with_name("appsettings").required(false))
        .build()
        .expect("Failed to load configuration");
    let host = settings
        .get_string("server.host")
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = settings.get_int("server.port").unwrap_or(3001) as u16;

    let pool = connection::init_pool();
    {
        let conn = &mut pool.get().expect("Failed to get connection from pool");
        connection::run_migrations(conn).expect("Failed to run migrations");
    }
    let app_state = web::Data::new(AppState { pool });

    info!("Starting HTTP server on http://{host}:{port}");
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
