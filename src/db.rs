use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Migrations compiled into the binary from the `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies per-connection SQLite settings when a connection enters the pool.
///
/// Foreign keys are off by default in SQLite, so every connection has to opt in.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        let pragmas = format!(
            "PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        );
        conn.batch_execute(&pragmas).map_err(r2d2::Error::QueryError)
    }
}

/// Build an r2d2 pool of SQLite connections for `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout: Duration::from_secs(5),
        }))
        .build(manager)
}

/// Error raised while applying embedded migrations.
pub type MigrationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Run every pending embedded migration on a pooled connection.
pub fn run_pending_migrations(pool: &DbPool) -> Result<usize, MigrationError> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    Ok(applied.len())
}
