//! Shared harness for integration tests.

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use supplier_pricing::db::{DbConnection, DbPool, establish_connection_pool};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database scoped to one test. The file and its WAL sidecars are
/// removed on drop, and any leftovers from an aborted run on creation.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let path = PathBuf::from(filename);
        remove_db_files(&path);

        let pool = establish_connection_pool(filename)
            .expect("Failed to establish SQLite connection.");
        pool.get()
            .expect("Failed to get SQLite connection from pool.")
            .run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { path, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn conn(&self) -> DbConnection {
        self.pool
            .get()
            .expect("Failed to get SQLite connection from pool.")
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        remove_db_files(&self.path);
    }
}

fn remove_db_files(path: &Path) {
    for suffix in ["", "-shm", "-wal"] {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(suffix);
        std::fs::remove_file(&sidecar).ok();
    }
}
