use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use config::Config;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type SqlitePooledConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

// Applied to every pooled connection. The bounded busy_timeout is what
// turns writer contention into an SQLITE_BUSY failure instead of an
// indefinite block.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA journal_mode = WAL; \
             PRAGMA busy_timeout = 5000; \
             PRAGMA foreign_keys = ON;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn build_pool(
    database_url: &str,
    max_size: u32,
    timeout: Duration,
) -> Result<SqlitePool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_timeout(timeout)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
}

pub fn init_pool() -> SqlitePool {
    let settings = Config::builder()
        .add_source(config::File::with_name("appsettings").required(false))
        .build()
        .expect("Failed to load configuration");

    let database_url = std::env::var("DATABASE_URL")
        .or_else(|_| settings.get_string("database.url"))
        .unwrap_or_else(|_| "inventory.db".to_string());
    let pool_size = settings.get_int("database.pool_size").unwrap_or(10) as u32;
    let timeout = settings.get_int("database.timeout_seconds").unwrap_or(30) as u64;

    build_pool(&database_url, pool_size, Duration::from_secs(timeout))
        .expect("Failed to create pool")
}

pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}
