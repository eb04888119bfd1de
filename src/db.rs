//! SQLite connection pool and embedded migrations.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::config::StoreConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pragmas applied to every connection handed out by the pool.
///
/// Foreign keys are off by default in SQLite; join-row cascades rely on them.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build an r2d2 pool for the configured database.
pub fn establish_connection_pool(config: &StoreConfig) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);
    let pool = Pool::builder()
        .max_size(config.max_pool_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;

    Ok(pool)
}

/// Apply every embedded migration that has not run yet, returning how many ran.
pub fn run_pending_migrations(conn: &mut SqliteConnection) -> RepositoryResult<usize> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| RepositoryError::Migration(err.to_string()))?;

    for version in &applied {
        log::info!("Applied migration {version}");
    }

    Ok(applied.len())
}
